use carzone_frontend::{config, router};
use leptos::spawn_local;

fn main() {
    carzone_frontend::start();

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
