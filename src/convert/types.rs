/// Node type tags (`ctype`) understood by the builder.
///
/// Unknown tags are kept verbatim and produce structural nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    GameNode,
    GameLayer,
    SingleNode,
    Sprite,
    ImageView,
    Particle,
    GameMap,
    SimpleAudio,
    Button,
    TextBMFont,
    Text,
    LoadingBar,
    TextField,
    Panel,
    CheckBox,
    TextAtlas,
    Slider,
    ListView,
    PageView,
    ProjectNode,
    ScrollView,
    Unrecognized(String),
}

/// How the target node for a source node is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Creator {
    /// A plain empty node.
    Default,
    /// An instance of a nested document's prefab.
    ProjectNode,
    /// A scroll node whose children live under a separate content node.
    ScrollView,
}

impl NodeType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "GameNodeObjectData" => Self::GameNode,
            "GameLayerObjectData" => Self::GameLayer,
            "SingleNodeObjectData" => Self::SingleNode,
            "SpriteObjectData" => Self::Sprite,
            "ImageViewObjectData" => Self::ImageView,
            "ParticleObjectData" => Self::Particle,
            "GameMapObjectData" => Self::GameMap,
            "SimpleAudioObjectData" => Self::SimpleAudio,
            "ButtonObjectData" => Self::Button,
            "TextBMFontObjectData" => Self::TextBMFont,
            "TextObjectData" => Self::Text,
            "LoadingBarObjectData" => Self::LoadingBar,
            "TextFieldObjectData" => Self::TextField,
            "PanelObjectData" => Self::Panel,
            "CheckBoxObjectData" => Self::CheckBox,
            "TextAtlasObjectData" => Self::TextAtlas,
            "SliderObjectData" => Self::Slider,
            "ListViewObjectData" => Self::ListView,
            "PageViewObjectData" => Self::PageView,
            "ProjectNodeObjectData" => Self::ProjectNode,
            "ScrollViewObjectData" => Self::ScrollView,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::GameNode => "GameNodeObjectData",
            Self::GameLayer => "GameLayerObjectData",
            Self::SingleNode => "SingleNodeObjectData",
            Self::Sprite => "SpriteObjectData",
            Self::ImageView => "ImageViewObjectData",
            Self::Particle => "ParticleObjectData",
            Self::GameMap => "GameMapObjectData",
            Self::SimpleAudio => "SimpleAudioObjectData",
            Self::Button => "ButtonObjectData",
            Self::TextBMFont => "TextBMFontObjectData",
            Self::Text => "TextObjectData",
            Self::LoadingBar => "LoadingBarObjectData",
            Self::TextField => "TextFieldObjectData",
            Self::Panel => "PanelObjectData",
            Self::CheckBox => "CheckBoxObjectData",
            Self::TextAtlas => "TextAtlasObjectData",
            Self::Slider => "SliderObjectData",
            Self::ListView => "ListViewObjectData",
            Self::PageView => "PageViewObjectData",
            Self::ProjectNode => "ProjectNodeObjectData",
            Self::ScrollView => "ScrollViewObjectData",
            Self::Unrecognized(tag) => tag,
        }
    }

    pub fn creator(&self) -> Creator {
        match self {
            Self::ProjectNode => Creator::ProjectNode,
            Self::ScrollView => Creator::ScrollView,
            _ => Creator::Default,
        }
    }

    /// Whether a component initializer exists for this type.
    pub fn has_initializer(&self) -> bool {
        !matches!(
            self,
            Self::GameNode
                | Self::GameLayer
                | Self::SingleNode
                | Self::ProjectNode
                | Self::ScrollView
                | Self::Unrecognized(_)
        )
    }

    /// Root containers only carry a name and a size.
    pub fn applies_transform(&self) -> bool {
        !matches!(self, Self::GameNode | Self::GameLayer)
    }

    /// Text fields and scroll views keep the default tint.
    pub fn applies_tint(&self) -> bool {
        !matches!(self, Self::TextField | Self::ScrollView)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/types.rs"]
mod tests;
