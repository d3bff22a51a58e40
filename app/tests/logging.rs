use tracing::info;

#[test]
fn init_twice_keeps_first_subscriber() {
    app::logging::init();
    app::logging::init();
    info!("logging initialized");
}
