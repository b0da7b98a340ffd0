//! CLI driver for sparse matrix operations
//!
//! Reads two matrix files, applies the chosen operation, and writes
//! the result under the output directory. The operation and file
//! paths can be passed as arguments or entered at the interactive
//! prompt.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use smtx::{read_matrix, save_matrix, Result, SparseMatrix};

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Sparse matrix addition, subtraction, and multiplication over text files")]
struct Cli {
    /// Operation to perform (prompted interactively when omitted)
    #[arg(value_enum)]
    operation: Option<Operation>,

    /// Path to the first matrix file
    first: Option<PathBuf>,

    /// Path to the second matrix file
    second: Option<PathBuf>,

    /// Directory the result file is written into
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    /// Add two matrices
    Add,
    /// Subtract the second matrix from the first
    Subtract,
    /// Multiply two matrices
    Multiply,
}

impl Operation {
    fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::Subtract),
            "3" => Some(Operation::Multiply),
            _ => None,
        }
    }

    fn apply(self, first: &SparseMatrix, second: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => first.add(second),
            Operation::Subtract => first.subtract(second),
            Operation::Multiply => first.multiply(second),
        }
    }

    fn result_file(self) -> &'static str {
        match self {
            Operation::Add => "addition_result.txt",
            Operation::Subtract => "subtraction_result.txt",
            Operation::Multiply => "multiplication_result.txt",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // All outcomes are reported via console text
    if let Err(err) = run(cli) {
        println!("Error: {err}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let operation = match cli.operation {
        Some(operation) => operation,
        None => prompt_operation()?,
    };
    let first = match cli.first {
        Some(path) => path,
        None => PathBuf::from(prompt_line("Enter the path for the first matrix file: ")?),
    };
    let second = match cli.second {
        Some(path) => path,
        None => PathBuf::from(prompt_line("Enter the path for the second matrix file: ")?),
    };

    let matrix_a = read_matrix(&first)?;
    let matrix_b = read_matrix(&second)?;
    let result = operation.apply(&matrix_a, &matrix_b)?;

    fs::create_dir_all(&cli.out_dir)?;
    let out_path = cli.out_dir.join(operation.result_file());
    save_matrix(&out_path, &result)?;

    println!(
        "Operation completed successfully. Result saved to {}",
        out_path.display()
    );
    Ok(())
}

fn prompt_operation() -> Result<Operation> {
    println!("Sparse Matrix Operations");
    println!("1. Add two matrices");
    println!("2. Subtract two matrices");
    println!("3. Multiply two matrices");

    loop {
        let choice = prompt_line("Enter your choice (1-3): ")?;
        match Operation::from_menu_choice(&choice) {
            Some(operation) => return Ok(operation),
            None => println!("Invalid choice. Please enter a number between 1 and 3."),
        }
    }
}

fn prompt_line(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert!(matches!(Operation::from_menu_choice("1"), Some(Operation::Add)));
        assert!(matches!(Operation::from_menu_choice("2"), Some(Operation::Subtract)));
        assert!(matches!(Operation::from_menu_choice("3"), Some(Operation::Multiply)));
        assert!(Operation::from_menu_choice("4").is_none());
        assert!(Operation::from_menu_choice("add").is_none());
    }

    #[test]
    fn test_result_file_names() {
        assert_eq!(Operation::Add.result_file(), "addition_result.txt");
        assert_eq!(Operation::Subtract.result_file(), "subtraction_result.txt");
        assert_eq!(Operation::Multiply.result_file(), "multiplication_result.txt");
    }
}
