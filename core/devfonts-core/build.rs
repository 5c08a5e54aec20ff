/// Rebuild when the bundled catalog changes; it is embedded with `include_str!`.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/catalog.json");
}
