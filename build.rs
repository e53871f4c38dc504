use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

fn main() {
    let root = Path::new("solutions");
    println!("cargo:rerun-if-changed={}", root.display());

    let mut files = vec![];
    if root.is_dir() {
        walk(root, &mut files);
    }
    files.sort();

    let mut mods = String::new();
    let mut reg =
        String::from("pub type Solver = fn(crate::infra::Part, &str) -> anyhow::Result<String>;\n");
    reg.push_str("pub static REGISTRY: &[(u16, u8, Solver)] = &[\n");

    for (rel, year, day) in files {
        let module = format!("y{year}_day{day:02}");
        let absolute = fs::canonicalize(&rel).unwrap();
        let abs_path = absolute.to_str().unwrap();
        mods.push_str(&format!("#[path = {abs_path:?}] pub mod {module};\n"));
        reg.push_str(&format!(
            "    ({year}, {day}, crate::infra::solutions::{module}::solve as Solver),\n",
        ));
        println!("cargo:rerun-if-changed={rel}");
    }
    reg.push_str("];\n");

    let out = PathBuf::from(env::var("OUT_DIR").unwrap());
    write_if_changed(out.join("solutions_mod.rs"), mods.as_bytes());
    write_if_changed(out.join("registry.rs"), reg.as_bytes());
}

/// Collects `solutions/<YYYY>/day<DD>.rs`, skipping anything else.
fn walk(dir: &Path, out: &mut Vec<(String, u16, u8)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let p = entry.unwrap().path();
        if p.is_dir() {
            // rerun when a new day file lands in an existing year
            println!("cargo:rerun-if-changed={}", p.display());
            walk(&p, out);
        } else if p.extension().and_then(|s| s.to_str()) == Some("rs") {
            let stem = p.file_stem().unwrap().to_str().unwrap();
            let year = p
                .parent()
                .and_then(|d| d.file_name())
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u16>().ok());
            let day = stem
                .strip_prefix("day")
                .filter(|d| d.len() == 2 && d.chars().all(|c| c.is_ascii_digit()))
                .and_then(|d| d.parse::<u8>().ok());
            if let (Some(year), Some(day)) = (year, day) {
                out.push((p.to_string_lossy().into_owned(), year, day));
            }
        }
    }
}

fn write_if_changed(path: PathBuf, bytes: &[u8]) {
    if fs::read(&path).ok().as_deref() != Some(bytes) {
        fs::File::create(&path).unwrap().write_all(bytes).unwrap();
    }
}
