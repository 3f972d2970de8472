use std::env;
use std::path::Path;

use vibrant::Builder;

fn main() {
    let source = env::args().nth(1).expect("No source image given.");
    let img = image::open(&Path::new(&source))
        .unwrap_or_else(|_| panic!("Could not load image {:?}", source));

    let palette = Builder::from_image(&img)
        .generate()
        .expect("Default palette settings are valid");
    println!("{}", palette);
}
