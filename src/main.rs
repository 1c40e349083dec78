use env_logger::Env;

fn main() {
    // stderr only, stdout belongs to the capability markers
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    conn_compose::playground::run();
}
