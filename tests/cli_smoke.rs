use std::path::PathBuf;

fn storegen_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_storegen")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "storegen.exe"
            } else {
                "storegen"
            });
            p
        })
}

#[test]
fn cli_icon_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("icon.png");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(storegen_exe())
        .args(["icon", "--preset", "vector-exact", "--out"])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (512, 512));
    assert_eq!(img.get_pixel(0, 0).0, [204, 227, 255, 255]);
}

#[test]
fn cli_icon_accepts_the_guidelines_preset_name() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("icon_guidelines.png");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(storegen_exe())
        .args(["icon", "--preset", "guidelines-2025", "--out"])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (512, 512));
    assert_eq!(img.get_pixel(0, 0).0, [204, 227, 255, 255]);
}

#[test]
fn cli_compose_renders_a_json_graphic() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let graphic_path = dir.join("graphic.json");
    let out_path = dir.join("composed.png");
    let _ = std::fs::remove_file(&out_path);

    std::fs::write(
        &graphic_path,
        include_str!("data/book_icon.json"),
    )
    .unwrap();

    let in_arg = graphic_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(storegen_exe())
        .args(["compose", "--in", in_arg.as_str(), "--out"])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
}

#[test]
fn cli_rejects_invalid_graphic_json() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let graphic_path = dir.join("bad.json");
    std::fs::write(&graphic_path, "{\"not\": \"a graphic\"}").unwrap();

    let in_arg = graphic_path.to_string_lossy().to_string();
    let status = std::process::Command::new(storegen_exe())
        .args(["compose", "--in", in_arg.as_str(), "--out", "unused.png"])
        .status()
        .unwrap();

    assert!(!status.success());
}
