// Crown Screens landing page - Leptos 0.8 CSR
// (c)2024 Crown Screens Software

fn main() {
    crown_landing::start();
}
