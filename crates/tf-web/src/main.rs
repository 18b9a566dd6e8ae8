use tf_web::{app::services::embedded_config, app_root::AppRoot};

fn main() {
    let config = embedded_config();
    tf_web::app::logging::init(config.log_level.as_deref());
    dioxus::launch(AppRoot);
}
