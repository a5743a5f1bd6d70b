use drawps::read_smf_file;

fn main() {
    env_logger::init();

    let faces = read_smf_file("drawps/examples/cube.smf").expect("read smf file");
    for face in &faces {
        let [a, b, c] = face.0;
        println!(
            "({}, {}, {})  ({}, {}, {})  ({}, {}, {})",
            a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
        );
    }
    println!("{} faces", faces.len());
}
