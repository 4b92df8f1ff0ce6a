use crate::assets::resolver::AssetHandle;
use crate::foundation::core::{Color, NodeId};

/// Source blend factor `SRC_ALPHA`.
pub const BLEND_SRC_ALPHA: i64 = 770;
/// Destination blend factor `ONE_MINUS_SRC_ALPHA`.
pub const BLEND_ONE_MINUS_SRC_ALPHA: i64 = 771;

/// Behaviour or rendering data attached to a target node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    #[serde(rename = "cc.Canvas")]
    Canvas,
    #[serde(rename = "cc.Camera")]
    Camera,
    #[serde(rename = "cc.Sprite")]
    Sprite(Sprite),
    #[serde(rename = "cc.Label")]
    Label(Label),
    #[serde(rename = "cc.Button")]
    Button(Button),
    #[serde(rename = "cc.ProgressBar")]
    ProgressBar(ProgressBar),
    #[serde(rename = "cc.EditBox")]
    EditBox(EditBox),
    #[serde(rename = "cc.Mask")]
    Mask(Mask),
    #[serde(rename = "cc.ParticleSystem")]
    ParticleSystem(ParticleSystem),
    #[serde(rename = "cc.TiledMap")]
    TiledMap(TiledMap),
    #[serde(rename = "cc.AudioSource")]
    AudioSource(AudioSource),
    #[serde(rename = "cc.ScrollView")]
    ScrollView(ScrollView),
    #[serde(rename = "cc.Scrollbar")]
    Scrollbar(Scrollbar),
    #[serde(rename = "cc.StudioComponent")]
    Studio(StudioComponent),
    #[serde(rename = "cc.StudioWidget")]
    Widget(Widget),
    #[serde(rename = "cc.BlockInputEvents")]
    BlockInputEvents,
    #[serde(rename = "cc.Animation")]
    Animation(AnimationComponent),
}

impl Component {
    /// Engine type name, also used as the key of component-scoped animation tracks.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Canvas => "cc.Canvas",
            Self::Camera => "cc.Camera",
            Self::Sprite(_) => "cc.Sprite",
            Self::Label(_) => "cc.Label",
            Self::Button(_) => "cc.Button",
            Self::ProgressBar(_) => "cc.ProgressBar",
            Self::EditBox(_) => "cc.EditBox",
            Self::Mask(_) => "cc.Mask",
            Self::ParticleSystem(_) => "cc.ParticleSystem",
            Self::TiledMap(_) => "cc.TiledMap",
            Self::AudioSource(_) => "cc.AudioSource",
            Self::ScrollView(_) => "cc.ScrollView",
            Self::Scrollbar(_) => "cc.Scrollbar",
            Self::Studio(_) => "cc.StudioComponent",
            Self::Widget(_) => "cc.StudioWidget",
            Self::BlockInputEvents => "cc.BlockInputEvents",
            Self::Animation(_) => "cc.Animation",
        }
    }

    /// Render components are mutually exclusive on a node.
    pub fn is_renderer(&self) -> bool {
        matches!(
            self,
            Self::Sprite(_) | Self::Label(_) | Self::Mask(_) | Self::ParticleSystem(_)
        )
    }

    /// Rewrite node references, e.g. after the owning subtree is copied into another graph.
    /// References the mapping drops become `None`.
    pub fn remap_nodes(&mut self, map: impl Fn(NodeId) -> Option<NodeId>) {
        fn remap(slot: &mut Option<NodeId>, map: &impl Fn(NodeId) -> Option<NodeId>) {
            *slot = slot.and_then(map);
        }
        match self {
            Self::ProgressBar(p) => remap(&mut p.bar_sprite, &map),
            Self::ScrollView(s) => {
                remap(&mut s.content, &map);
                remap(&mut s.horizontal_scrollbar, &map);
                remap(&mut s.vertical_scrollbar, &map);
            }
            Self::Scrollbar(s) => remap(&mut s.handle, &map),
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    #[default]
    Trimmed,
    Raw,
    Custom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteType {
    #[default]
    Simple,
    Sliced,
    Filled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillType {
    Horizontal,
    Vertical,
    Radial,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sprite {
    pub sprite_frame: Option<AssetHandle>,
    pub size_mode: SizeMode,
    pub sprite_type: SpriteType,
    pub trim: bool,
    pub src_blend_factor: i64,
    pub dst_blend_factor: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_type: Option<FillType>,
    #[serde(default)]
    pub fill_start: f64,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            sprite_frame: None,
            size_mode: SizeMode::Trimmed,
            sprite_type: SpriteType::Simple,
            trim: true,
            src_blend_factor: BLEND_SRC_ALPHA,
            dst_blend_factor: BLEND_ONE_MINUS_SRC_ALPHA,
            fill_type: None,
            fill_start: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    #[default]
    None,
    Clamp,
    Shrink,
    ResizeHeight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Label {
    pub string: String,
    pub font_size: f64,
    pub line_height: f64,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub overflow: Overflow,
    pub use_original_size: bool,
    pub font: Option<AssetHandle>,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            string: String::new(),
            font_size: 40.0,
            line_height: 40.0,
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Center,
            overflow: Overflow::None,
            use_original_size: true,
            font: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTransition {
    #[default]
    None,
    Color,
    Sprite,
    Scale,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Button {
    pub interactable: bool,
    pub transition: ButtonTransition,
    pub normal_sprite: Option<AssetHandle>,
    pub hover_sprite: Option<AssetHandle>,
    pub pressed_sprite: Option<AssetHandle>,
    pub disabled_sprite: Option<AssetHandle>,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            interactable: true,
            transition: ButtonTransition::None,
            normal_sprite: None,
            hover_sprite: None,
            pressed_sprite: None,
            disabled_sprite: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMode {
    #[default]
    Horizontal,
    Vertical,
    Filled,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressBar {
    pub mode: ProgressMode,
    pub reverse: bool,
    pub total_length: f64,
    pub progress: f64,
    /// Node carrying the bar sprite.
    pub bar_sprite: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFlag {
    Password,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    SingleLine,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EditBox {
    pub string: String,
    pub placeholder: String,
    pub font_color: Color,
    pub font_size: i64,
    pub line_height: f64,
    /// `-1` means unlimited.
    pub max_length: i64,
    pub use_original_size: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_flag: Option<InputFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mask {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleSystem {
    pub file: Option<AssetHandle>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TiledMap {
    pub tmx_file: Option<AssetHandle>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioSource {
    pub clip: Option<AssetHandle>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollView {
    pub inertia: bool,
    pub vertical: bool,
    pub horizontal: bool,
    pub content: Option<NodeId>,
    pub vertical_scrollbar: Option<NodeId>,
    pub horizontal_scrollbar: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scrollbar {
    pub direction: ScrollDirection,
    /// Node carrying the handle sprite.
    pub handle: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListDirection {
    Horizontal,
    Vertical,
}

/// Studio widgets without a direct engine counterpart, kept as a typed property bag.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "studio_type", rename_all = "snake_case")]
pub enum StudioComponent {
    CheckBox {
        normal_back_frame: Option<AssetHandle>,
        pressed_back_frame: Option<AssetHandle>,
        disable_back_frame: Option<AssetHandle>,
        normal_frame: Option<AssetHandle>,
        disable_frame: Option<AssetHandle>,
        interactable: bool,
        checked: bool,
    },
    TextAtlas {
        atlas_frame: Option<AssetHandle>,
        first_char: String,
        char_width: i64,
        char_height: i64,
        string: String,
    },
    SliderBar {
        back_frame: Option<AssetHandle>,
        bar_frame: Option<AssetHandle>,
        btn_normal_frame: Option<AssetHandle>,
        btn_pressed_frame: Option<AssetHandle>,
        btn_disabled_frame: Option<AssetHandle>,
        interactable: bool,
        progress: f64,
    },
    ListView {
        inertia: bool,
        direction: ListDirection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        horizontal_align: Option<HorizontalAlign>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vertical_align: Option<VerticalAlign>,
        padding: i64,
    },
    PageView,
}

/// One docked edge of a [`Widget`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeConstraint {
    /// Absolute margin when `absolute`, otherwise a fraction of the parent size.
    pub value: f64,
    pub absolute: bool,
}

impl EdgeConstraint {
    pub fn absolute(value: f64) -> Self {
        Self {
            value,
            absolute: true,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            absolute: false,
        }
    }
}

/// Responsive docking constraints.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Widget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<EdgeConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<EdgeConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeConstraint>,
    #[serde(default)]
    pub horizontal_center: bool,
    #[serde(default)]
    pub vertical_center: bool,
}

impl Widget {
    /// Widget that keeps the node centered in its parent.
    pub fn centered() -> Self {
        Self {
            horizontal_center: true,
            vertical_center: true,
            ..Self::default()
        }
    }
}

/// Reference to an imported animation clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipRef {
    pub name: String,
    pub handle: AssetHandle,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationComponent {
    pub clips: Vec<ClipRef>,
}
