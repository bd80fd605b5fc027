use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;
use std::process::exit;
use std::{env, io};

use thiserror::Error;

use crate::diagnostics::{robot_scan_errors, scan_errors, ScanningError};
use crate::generic_scanner::scan_generic;
use crate::projection::{project_generic, project_robot};
use crate::repl::MultilineInput;
use crate::robot_scanner::scan_robot;
use crate::samples::{JAVA_SAMPLE, ROBOT_SAMPLE};
use crate::symbols::{generic_symbols, robot_symbols};

mod classify;
mod diagnostics;
mod generic_scanner;
mod projection;
mod repl;
mod robot_scanner;
mod samples;
mod symbols;
#[cfg(test)]
mod test_helpers;
mod token;

const USAGE: &str = "Usage: lexan <robot|java> [script | --sample]";
const SEPARATOR: &str = "-------------------------------------------------------------------";

#[derive(Debug, Error)]
enum CLIError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("file does not seem to exist {0}")]
    FileDoesNotExist(String),
    #[error("unknown language {0}, expected robot or java")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Language {
    Robot,
    Java,
}

impl Language {
    fn parse(name: &str) -> Result<Language, CLIError> {
        match name.to_ascii_lowercase().as_str() {
            "robot" => Ok(Language::Robot),
            "java" => Ok(Language::Java),
            _ => Err(CLIError::UnknownLanguage(name.to_string())),
        }
    }

    fn sample(&self) -> &'static str {
        match self {
            Language::Robot => ROBOT_SAMPLE,
            Language::Java => JAVA_SAMPLE,
        }
    }
}

fn main() -> Result<(), color_eyre::eyre::Error> {
    color_eyre::install()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        println!("Expected one or two arguments, received {}", args.len().saturating_sub(1));
        println!("{USAGE}");
        exit(64);
    }
    let language = Language::parse(&args[1])?;
    match args.get(2).map(String::as_str) {
        Some("--sample") => run(language, language.sample()),
        Some(file_path) => run_file(language, file_path)?,
        None => run_prompt(language)?,
    }
    Ok(())
}

fn run_file(language: Language, path_string: &str) -> Result<(), CLIError> {
    let path = Path::new(path_string);
    if !path.try_exists()? {
        return Err(CLIError::FileDoesNotExist(path_string.to_string()));
    }
    let content = read_to_string(path)?;
    run(language, &content);
    Ok(())
}

fn run_prompt(language: Language) -> Result<(), CLIError> {
    fn prompt() -> io::Result<()> {
        print!("> ");
        io::stdout().flush()
    }

    prompt()?;
    for source in MultilineInput::new(io::stdin().lines()) {
        run(language, &source?);
        prompt()?;
    }
    Ok(())
}

fn run(language: Language, source: &str) {
    if source.trim().is_empty() {
        println!("No code to analyze");
        return;
    }
    match language {
        Language::Robot => run_robot(source),
        Language::Java => run_java(source),
    }
}

fn run_robot(source: &str) {
    let tokens = scan_robot(source);

    println!("=== TOKENS ===");
    println!("{:<15} {:<15} {:<15} {:<5} {:<5}", "LEXEMA", "TIPO", "VALOR", "LINEA", "COL");
    println!("{SEPARATOR}");
    for token in &tokens {
        println!("{token}");
    }

    let rows = project_robot(&tokens);
    println!("\n=== TABLA DE TOKENS ===");
    println!("{:<15} {:<15} {:<15} {:<15}", "TOKEN", "TIPO", "VALOR", "PARAMETRO");
    println!("{SEPARATOR}");
    for row in &rows {
        println!("{row}");
    }

    println!("\n=== TABLA DE SIMBOLOS ===");
    println!("{:<15} {:<15} {:<15}", "NOMBRE", "TIPO", "VALOR");
    println!("{SEPARATOR}");
    for symbol in robot_symbols(&tokens, &rows) {
        println!("{symbol}");
    }

    report_errors(robot_scan_errors(&tokens));
}

fn run_java(source: &str) {
    let tokens = scan_generic(source);

    println!("=== TOKENS ===");
    println!("{:<20} {:<15} {:<5} {:<5}", "LEXEMA", "TIPO", "LINEA", "COL");
    println!("{SEPARATOR}");
    for token in &tokens {
        println!("{token}");
    }

    println!("\n=== TABLA DE TOKENS ===");
    println!("{:<20} {:<15} {:<5}", "TOKEN", "TIPO", "LINEA");
    println!("{SEPARATOR}");
    for row in project_generic(&tokens) {
        println!("{row}");
    }

    println!("\n=== TABLA DE SIMBOLOS ===");
    println!("{:<15} {:<15} {:<15}", "IDENTIFICADOR", "TIPO", "LINEA");
    println!("{SEPARATOR}");
    for symbol in generic_symbols(&tokens) {
        println!("{symbol}");
    }

    report_errors(scan_errors(&tokens));
}

fn report_errors(errors: Vec<ScanningError>) {
    if errors.is_empty() {
        return;
    }
    println!();
    for err in errors {
        report(err.get_line(), &format!("at column {}", err.get_column()), &format!("{err}"));
    }
}

fn report(line: usize, location: &str, message: &str) {
    println!("[line {line}] Error {location}: {message}")
}
