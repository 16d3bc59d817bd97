use labyrinth::{app::App, generators::Generator, logging, solvers::Solver};

fn main() -> std::io::Result<()> {
    let _guard = logging::init("labyrinth-profile.log");
    let app = App::from_env();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());

    for generator in [Generator::Dfs, Generator::Kruskal] {
        for solver in [Solver::Bfs, Solver::AStar] {
            match app.profile(255, 255, generator, solver, num_iters) {
                Ok(total) => println!("{generator} + {solver}: {total:?}"),
                Err(err) => eprintln!("{generator} + {solver}: {err}"),
            }
        }
    }
    Ok(())
}
