use conference_view_yew::App;

fn main() {
    tracing_wasm::set_as_global_default();
    tracing::info!("Starting conference demo");
    yew::Renderer::<App>::new().render();
}
