use dino_runner::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
