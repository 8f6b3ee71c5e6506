//! Show how diagnostics are collected for malformed input.

fn main() {
    let input = "\
host = 'localhost'
port = :8080
??? , retries = 3
limits { burst = [1, 2 }
";

    let parsed = ycl::parse(input);

    println!("Recovered {} statement(s):", parsed.file.statements.len());
    print!("{}", ycl::dump(&parsed.file));

    println!();
    println!("{} diagnostic(s):", parsed.errors.len());
    for error in &parsed.errors {
        println!("  {error}");
        println!("    Kind: {:?}", error.kind);
        println!(
            "    Location: line {}, column {} (byte {})",
            error.span.line, error.span.column, error.span.offset
        );
    }
}
