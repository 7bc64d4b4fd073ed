use portal_frontend::App;

fn main() {
    portal_frontend::logging::init();
    yew::Renderer::<App>::new().render();
}
