use labyrinth::{app::App, logging};

fn main() -> std::io::Result<()> {
    let _guard = logging::init("labyrinth.log");
    let app = App::from_env();

    let mut input = std::io::stdin().lock();
    let mut stdout = std::io::stdout();
    app.run(&mut input, &mut stdout)
}
