use super::*;

fn opts() -> ImportOpts {
    ImportOpts {
        out_dir: PathBuf::from("/out"),
        ..ImportOpts::default()
    }
}

#[test]
fn nested_sources_mirror_their_directory() {
    let p = ArtifactPaths::new(Path::new("ui/menus/Main.csd"), &opts(), "db://assets/Game");
    assert_eq!(p.rel_dir, "ui/menus");
    assert_eq!(p.stem, "Main");
    assert_eq!(p.artifact_path(ArtifactKind::Scene), PathBuf::from("/out/ui/menus/Main.fire"));
    assert_eq!(p.artifact_url(ArtifactKind::Prefab), "db://assets/Game/ui/menus/Main.prefab");
    assert_eq!(p.clip_path("idle"), PathBuf::from("/out/ui/menus/Main_action/idle.anim"));
    assert_eq!(p.clip_url("idle"), "db://assets/Game/ui/menus/Main_action/idle.anim");
}

#[test]
fn top_level_sources_go_to_the_output_root() {
    let p = ArtifactPaths::new(Path::new("Coin.csd"), &opts(), "db://assets/Game");
    assert_eq!(p.rel_dir, "");
    assert_eq!(p.target_url, "db://assets/Game");
    assert_eq!(p.artifact_path(ArtifactKind::Prefab), PathBuf::from("/out/Coin.prefab"));
}

#[test]
fn paths_are_stable_across_calls() {
    let a = ArtifactPaths::new(Path::new("a/b.csd"), &opts(), "db://assets/X");
    let b = ArtifactPaths::new(Path::new("a/b.csd"), &opts(), "db://assets/X");
    assert_eq!(a, b);
    assert_eq!(a.clip_path("b1"), b.clip_path("b1"));
}
