fn main() {
    match tetris_hero::generate() {
        Ok(path) => println!("Hero image saved to: {}", path.display()),
        Err(err) => {
            eprintln!("hero generation failed: {err}");
            std::process::exit(1);
        }
    }
}
