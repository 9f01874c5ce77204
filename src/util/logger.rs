use env_logger::Env;
use log::Level;

pub fn init(level: Level, backtrace: bool) {
    if backtrace && std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    let env = Env::default().default_filter_or(level.to_string());
    let _ = env_logger::Builder::from_env(env).try_init();
}

pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        hook(panic_info);
        std::process::exit(1);
    }));
}
