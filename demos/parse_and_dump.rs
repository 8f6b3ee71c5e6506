//! Parse a YCL string, inspect the tree, and re-format it.

use ycl::Statement;

fn main() {
    let input = "\
my_value = 1234,
my_object {
  field1 = 'YCL',
  field4 = [ 'item1', 42, 'item3' ]
},
another_value = `Hello $(my_object.field1) World!`
";

    let parsed = ycl::parse(input);
    println!("Statements: {}", parsed.file.statements.len());
    for statement in &parsed.file.statements {
        match statement {
            Statement::Assign(assign) => {
                println!("  {} is a {}", assign.name, assign.value.kind_name());
            }
            Statement::Block(block) => {
                println!("  {} holds {} statement(s)", block.name, block.body.len());
            }
        }
    }

    println!("\nTree:\n{}", ycl::dump(&parsed.file));
    println!("Formatted output:\n{}", ycl::format(&parsed.file));
}
