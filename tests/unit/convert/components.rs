use super::*;
use crate::assets::AssetLibrary;
use crate::assets::resolver::AssetResolver;
use crate::document::parse_markup;
use crate::foundation::diag::Diagnostics;
use crate::scene::component::{ButtonTransition, ProgressMode};

const ROOT: &str = "db://assets/Demo";

struct Fixture {
    lib: AssetLibrary,
    diag: Diagnostics,
    graph: SceneGraph,
}

impl Fixture {
    fn new() -> Self {
        let mut lib = AssetLibrary::with_builtin_assets();
        lib.register("db://assets/Demo/img/hero.png/hero", None);
        lib.register("db://assets/Demo/fonts/digits.fnt", None);
        Self {
            lib,
            diag: Diagnostics::new(),
            graph: SceneGraph::new(),
        }
    }

    fn init(&mut self, xml: &str) -> NodeId {
        let data = parse_markup(xml.as_bytes()).unwrap();
        let node_type = NodeType::from_tag(data.type_tag());
        let id = self.graph.create(data.name());
        self.graph.node_mut(id).transform.size = crate::foundation::core::Size::new(120.0, 40.0);
        let mut cx = InitCtx {
            resolver: &mut self.lib,
            diag: &mut self.diag,
            root_url: ROOT,
        };
        init_component(&mut cx, &mut self.graph, id, &node_type, &data);
        id
    }
}

#[test]
fn sprite_maps_blend_and_frame() {
    let mut fx = Fixture::new();
    let id = fx.init(
        r#"<N Name="hero" ctype="SpriteObjectData">
             <BlendFunc Src="1" />
             <FileData Type="Normal" Path="img/hero.png" />
           </N>"#,
    );
    let sprite = fx.graph.node(id).sprite().unwrap();
    assert_eq!(sprite.src_blend_factor, BLEND_SRC_ALPHA);
    assert_eq!(sprite.dst_blend_factor, BLEND_ONE_MINUS_SRC_ALPHA);
    assert_eq!(sprite.size_mode, SizeMode::Raw);
    assert!(!sprite.trim);
    assert_eq!(
        sprite.sprite_frame,
        fx.lib.resolve_handle("db://assets/Demo/img/hero.png/hero")
    );
    assert!(fx.diag.is_empty());
}

#[test]
fn button_uses_default_frames_and_adds_label() {
    let mut fx = Fixture::new();
    let id = fx.init(
        r#"<N Name="ok" ButtonText="OK" FontSize="18" DisplayState="False" ctype="ButtonObjectData">
             <TextColor A="200" R="1" G="2" B="3" />
           </N>"#,
    );
    let node = fx.graph.node(id);
    let Some(Component::Button(button)) = node.component("cc.Button") else {
        panic!("button missing");
    };
    assert!(!button.interactable);
    assert_eq!(button.transition, ButtonTransition::Sprite);
    assert_eq!(
        button.pressed_sprite,
        fx.lib.resolve_handle(builtin::DEFAULT_BTN_PRESSED_URL)
    );
    assert_eq!(button.hover_sprite, button.normal_sprite);
    assert_eq!(node.sprite().unwrap().sprite_frame, button.normal_sprite);

    let label_id = fx.graph.children(id)[0];
    let label_node = fx.graph.node(label_id);
    assert_eq!(label_node.name, "Label");
    assert_eq!(label_node.color, Color::rgb(1, 2, 3));
    assert_eq!(label_node.opacity, 200);
    assert_eq!(label_node.transform.size, node.transform.size);
    match label_node.component("cc.Label") {
        Some(Component::Label(l)) => {
            assert_eq!(l.string, "OK");
            assert_eq!(l.font_size, 18.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(label_node.has_component("cc.StudioWidget"));
}

#[test]
fn label_alignment_and_bmfont_metrics() {
    let mut fx = Fixture::new();
    let handle = fx.lib.resolve_handle("db://assets/Demo/fonts/digits.fnt").unwrap();
    let mut meta = fx.lib.read_metadata(&handle).unwrap();
    meta.set("fontSize", 32);
    meta.set("commonHeight", 36);
    fx.lib.write_metadata(&handle, meta).unwrap();

    let id = fx.init(
        r#"<N Name="score" LabelText="42" IsCustomSize="True" HorizontalAlignmentType="HT_Right" VerticalAlignmentType="VT_Center" ctype="TextBMFontObjectData">
             <LabelBMFontFile_CNB Type="Normal" Path="fonts/digits.fnt" />
           </N>"#,
    );
    let Some(Component::Label(l)) = fx.graph.node(id).component("cc.Label") else {
        panic!("label missing");
    };
    assert_eq!(l.string, "42");
    assert_eq!(l.horizontal_align, HorizontalAlign::Right);
    assert_eq!(l.vertical_align, VerticalAlign::Center);
    assert_eq!(l.overflow, Overflow::Clamp);
    assert!(!l.use_original_size);
    assert_eq!(l.font, Some(handle));
    assert_eq!(l.font_size, 32.0);
    assert_eq!(l.line_height, 36.0);
}

#[test]
fn loading_bar_fills_from_the_right_when_reversed() {
    let mut fx = Fixture::new();
    let id = fx.init(
        r#"<N Name="hp" ProgressType="Right_To_Left" ProgressInfo="50" ctype="LoadingBarObjectData" />"#,
    );
    let node = fx.graph.node(id);
    let sprite = node.sprite().unwrap();
    assert_eq!(sprite.sprite_type, SpriteType::Filled);
    assert_eq!(sprite.fill_start, 1.0);
    let Some(Component::ProgressBar(p)) = node.component("cc.ProgressBar") else {
        panic!("progress bar missing");
    };
    assert_eq!(p.mode, ProgressMode::Filled);
    assert!(p.reverse);
    assert_eq!(p.progress, 0.5);
    assert_eq!(p.bar_sprite, Some(id));
}

#[test]
fn edit_box_password_mode() {
    let mut fx = Fixture::new();
    let id = fx.init(
        r#"<N Name="pw" PasswordEnable="True" MaxLengthEnable="True" MaxLengthText="8" PlaceHolderText="secret" ctype="TextFieldObjectData" />"#,
    );
    let Some(Component::EditBox(e)) = fx.graph.node(id).component("cc.EditBox") else {
        panic!("edit box missing");
    };
    assert_eq!(e.placeholder, "secret");
    assert_eq!(e.max_length, 8);
    assert_eq!(e.font_size, 20);
    assert_eq!(e.input_flag, Some(InputFlag::Password));
    assert_eq!(e.input_mode, Some(InputMode::SingleLine));
}

#[test]
fn list_view_alignment_and_panel_mask() {
    let mut fx = Fixture::new();
    let id = fx.init(
        r#"<N Name="list" DirectionType="Vertical" HorizontalType="Align_HorizontalCenter" ItemMargin="6" ClipAble="True" ctype="ListViewObjectData" />"#,
    );
    let node = fx.graph.node(id);
    match node.component("cc.StudioComponent") {
        Some(Component::Studio(StudioComponent::ListView {
            direction,
            horizontal_align,
            vertical_align,
            padding,
            ..
        })) => {
            assert_eq!(*direction, ListDirection::Vertical);
            assert_eq!(*horizontal_align, Some(HorizontalAlign::Center));
            assert_eq!(*vertical_align, None);
            assert_eq!(*padding, 6);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(node.has_component("cc.Mask"));
}

#[test]
fn rejected_component_is_a_diagnostic() {
    let mut fx = Fixture::new();
    let id = fx.init(r#"<N Name="pic" ctype="SpriteObjectData" />"#);
    let data = parse_markup(br#"<N Name="pic" ClipAble="True" ctype="PanelObjectData" />"#).unwrap();
    let mut cx = InitCtx {
        resolver: &mut fx.lib,
        diag: &mut fx.diag,
        root_url: ROOT,
    };
    init_component(&mut cx, &mut fx.graph, id, &NodeType::Panel, &data);
    assert!(!fx.graph.node(id).has_component("cc.Mask"));
    assert_eq!(fx.diag.for_field("cc.Mask").count(), 1);
}

#[test]
fn structural_types_get_no_components() {
    let mut fx = Fixture::new();
    let id = fx.init(r#"<N Name="skel" ctype="SkeletonNodeObjectData" />"#);
    assert!(fx.graph.node(id).components.is_empty());
}
