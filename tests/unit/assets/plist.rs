use super::*;

const ATLAS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
  <dict>
    <key>frames</key>
    <dict>
      <key>ui/ok.png</key>
      <dict><key>frame</key><string>{{0,0},{10,10}}</string></dict>
      <key>ui/cancel.png</key>
      <dict><key>frame</key><string>{{10,0},{10,10}}</string></dict>
    </dict>
    <key>metadata</key>
    <dict><key>textureFileName</key><string>ui.png</string></dict>
  </dict>
</plist>"#;

const PARTICLE: &str = r#"<plist version="1.0"><dict>
  <key>duration</key><real>-1</real>
  <key>textureFileName</key><string>fire.png</string>
</dict></plist>"#;

#[test]
fn atlas_frames_in_order() {
    assert_eq!(frame_names(ATLAS).unwrap(), vec!["ui/ok.png", "ui/cancel.png"]);
    assert!(frame_names(PARTICLE).unwrap().is_empty());
}

#[test]
fn top_level_strings() {
    assert_eq!(
        top_level_string(PARTICLE, "textureFileName").unwrap().as_deref(),
        Some("fire.png")
    );
    assert_eq!(top_level_string(ATLAS, "textureFileName").unwrap(), None);
    assert!(top_level_string("<plist", "x").is_err());
}
