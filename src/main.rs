//! bitcalc - CLI Entry Point
//!
//! Commands:
//! - `bitcalc calc <representation> <operation> <a> <b>` - Run one operation
//! - `bitcalc convert <number> <from> <to>` - Convert between bases 2-20
//! - `bitcalc request [file]` - Answer a JSON request from a file or stdin
//! - `bitcalc test` - Built-in self-test

use std::io::Read;
use clap::{Parser, Subcommand};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;
use bitcalc::{BitString, Operation, Representation};

#[derive(Parser)]
#[command(name = "bitcalc")]
#[command(version = "0.1.0")]
#[command(about = "Fixed-width binary arithmetic in unsigned, sign-magnitude, 1's and 2's complement")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one arithmetic operation
    Calc {
        /// unsigned, signed, ones_complement or twos_complement
        representation: Representation,
        /// add, subtract, multiply or divide
        operation: Operation,
        /// First operand, e.g. 0101
        a: String,
        /// Second operand
        b: String,
        /// Bit width (default: length of the first operand)
        #[arg(short, long)]
        width: Option<usize>,
        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a number between bases 2 and 20
    Convert {
        /// The number, optionally signed and fractional
        number: String,
        /// Base the number is written in
        from: u32,
        /// Base to convert to
        to: u32,
    },
    /// Answer a JSON binary operation request
    Request {
        /// File holding the request (default: stdin)
        file: Option<String>,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG selects which events are printed, e.g. RUST_LOG=bitcalc=debug.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Ok(layer) => layer,
        Err(e) => {
            eprintln!("❌ Bad log filter: {}", e);
            std::process::exit(2);
        }
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match cli.command {
        Some(Commands::Calc { representation, operation, a, b, width, json }) => {
            calculate(representation, operation, &a, &b, width, json);
        }
        Some(Commands::Convert { number, from, to }) => {
            convert_number(&number, from, to);
        }
        Some(Commands::Request { file }) => {
            answer_request(file.as_deref());
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("bitcalc v0.1.0");
            println!("Fixed-width binary arithmetic");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_representations();
        }
    }
}

fn calculate(
    representation: Representation,
    operation: Operation,
    a: &str,
    b: &str,
    width: Option<usize>,
    json: bool,
) {
    use bitcalc::dispatch::{handle, Response};
    use bitcalc::BinaryOperationRequest;

    // Shell arguments may carry a 0b prefix or stray whitespace; requests may not.
    let a = strip_operand(a);
    let b = strip_operand(b);
    let request = BinaryOperationRequest {
        binary1: a.to_string(),
        binary2: b.to_string(),
        num_bits: width.unwrap_or(a.len()),
        operation: operation.name().to_string(),
        representation: canonical_name(representation).to_string(),
    };

    let report = match handle(&request) {
        Ok(report) => report,
        Err(e) => {
            if json {
                print_json(&Response::Failure { error: e.to_string() });
            } else {
                eprintln!("❌ {}", e);
            }
            std::process::exit(1);
        }
    };

    if json {
        print_json(&Response::Success(report));
        return;
    }

    println!("━━━ {} ━━━", report.operation);
    println!("Representation: {}", report.representation);
    print_value("A", &request.binary1, representation);
    print_value("B", &request.binary2, representation);
    if let Some(result) = &report.result {
        print_bits("Result", result, representation);
    }
    if let Some(bits) = report.result_bits {
        println!("Result bits: {}", bits);
    }
    if let Some(quotient) = &report.quotient {
        print_bits("Quotient", quotient, representation);
    }
    if let Some(remainder) = &report.remainder {
        print_bits("Remainder", remainder, representation);
    }
}

fn strip_operand(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix("0b").unwrap_or(text)
}

fn canonical_name(representation: Representation) -> &'static str {
    match representation {
        Representation::Unsigned => "unsigned",
        Representation::SignMagnitude => "signed",
        Representation::OnesComplement => "ones_complement",
        Representation::TwosComplement => "twos_complement",
    }
}

fn print_value(name: &str, text: &str, representation: Representation) {
    match BitString::parse(text) {
        Ok(bits) => print_bits(name, &bits, representation),
        Err(_) => println!("{:<10} {}", format!("{}:", name), text),
    }
}

fn print_bits(name: &str, bits: &BitString, representation: Representation) {
    let label = format!("{}:", name);
    match representation.decode(bits) {
        Some(value) => println!("{:<10} {} ({})", label, bits, value),
        None => println!("{:<10} {}", label, bits),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            event!(Level::ERROR, "failed to encode response: {}", e);
            std::process::exit(1);
        }
    }
}

fn convert_number(number: &str, from: u32, to: u32) {
    match bitcalc::convert(number, from, to) {
        Ok(result) => println!("{} (base {}) = {} (base {})", number, from, result, to),
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn answer_request(path: Option<&str>) {
    let input = match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
        }
    };
    let input = match input {
        Ok(input) => input,
        Err(e) => {
            event!(Level::ERROR, "failed to read request: {}", e);
            std::process::exit(1);
        }
    };

    match bitcalc::dispatch::dispatch_json(&input) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            event!(Level::ERROR, "malformed request: {}", e);
            std::process::exit(1);
        }
    }
}

fn demo_representations() {
    use bitcalc::evaluate;
    use bitcalc::Outcome;

    println!("━━━ -3 and 2 in 4 bits ━━━");
    println!();

    let operands = [
        (Representation::SignMagnitude, "1011", "0010"),
        (Representation::OnesComplement, "1100", "0010"),
        (Representation::TwosComplement, "1101", "0010"),
    ];

    for (representation, a, b) in operands {
        println!("{}:", representation);
        let (Ok(a), Ok(b)) = (BitString::parse(a), BitString::parse(b)) else {
            continue;
        };
        for operation in Operation::ALL {
            match evaluate(representation, operation, &a, &b, 4) {
                Ok(Outcome::Value(value)) => {
                    let decimal = representation.decode(&value).unwrap_or_default();
                    println!("  {:<9} {} ({})", operation.name(), value, decimal);
                }
                Ok(Outcome::Division { quotient, remainder }) => {
                    println!("  {:<9} {} r {}", operation.name(), quotient, remainder);
                }
                Err(e) => println!("  {:<9} error: {}", operation.name(), e),
            }
        }
        println!();
    }
}

fn run_self_test() {
    use bitcalc::{ArithError, Arithmetic, OnesComplement, SignMagnitude, TwosComplement, Unsigned};

    println!("━━━ bitcalc Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let bits = |s: &str| BitString::parse(s).unwrap_or_default();
    let mut check = |name: &str, ok: bool| {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    };

    check(
        "Unsigned overflow",
        Unsigned::add(&bits("1111"), &bits("0001"), 4) == Err(ArithError::Overflow),
    );
    check(
        "Unsigned underflow",
        Unsigned::subtract(&bits("0001"), &bits("0010"), 4) == Err(ArithError::Underflow),
    );
    check(
        "Sign-magnitude -3 + 3 = +0",
        SignMagnitude::add(&bits("1011"), &bits("0011"), 4) == Ok(bits("0000")),
    );
    check(
        "1's complement end-around carry",
        OnesComplement::add(&bits("1111"), &bits("0001"), 4) == Ok(bits("0001")),
    );
    check(
        "2's complement overflow",
        TwosComplement::add(&bits("0111"), &bits("0001"), 4) == Err(ArithError::TwosComplementOverflow),
    );
    check(
        "2's complement MIN / -1",
        TwosComplement::divide(&bits("1000"), &bits("1111"), 4)
            == Err(ArithError::TwosComplementDivisionOverflow),
    );
    check(
        "Division by zero",
        Unsigned::divide(&bits("0101"), &bits("0000"), 4) == Err(ArithError::DivisionByZero)
            && SignMagnitude::divide(&bits("0101"), &bits("0000"), 4) == Err(ArithError::DivisionByZero)
            && OnesComplement::divide(&bits("0101"), &bits("0000"), 4) == Err(ArithError::DivisionByZero)
            && TwosComplement::divide(&bits("0101"), &bits("0000"), 4) == Err(ArithError::DivisionByZero),
    );
    check(
        "Base conversion 255 -> FF",
        bitcalc::convert("255", 10, 16).as_deref() == Ok("FF"),
    );

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
