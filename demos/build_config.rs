//! Build a YCL document programmatically and print it.

use ycl::{Block, Expr, File};

fn main() {
    let file = File::new()
        .assign("name", Expr::string("api"))
        .assign("replicas", 3u64)
        .block(
            Block::new("server")
                .assign("host", Expr::string("0.0.0.0"))
                .assign("port", 8080u64)
                .assign("tls", false)
                .block(
                    Block::new("cors").assign(
                        "origins",
                        vec![Expr::string("https://example.com"), Expr::ident("default_origin")],
                    ),
                ),
        )
        .assign("banner", Expr::template("Serving $(name) on $(server.port)"));

    print!("{}", ycl::format(&file));
}
