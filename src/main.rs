use attendit::core::cli::CliArgs;
use attendit::core::context::AppContext;
use attendit::logging::LogTarget;
use attendit::prompter::flows::main_flow::MainFlow;
use attendit::prompter::prompter::Prompter;

fn main() {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::from_cli(args) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
