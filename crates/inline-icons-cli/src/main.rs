use std::process;

fn main() {
    match inline_icons_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("inline-icons error: {err}");
            process::exit(1);
        }
    }
}
