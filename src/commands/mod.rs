pub mod models;
pub mod new;

pub type CmdResult<T> = botstrap::Result<(T, i32)>;

macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (botstrap::Result<serde_json::Value>, i32) {
    crate::tty::status("botstrap is working...");

    match command {
        crate::Commands::New(args) => dispatch!(args, new),
        crate::Commands::Models(args) => dispatch!(args, models),
    }
}
