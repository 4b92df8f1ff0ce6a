//! Type-specific component initializers.

use crate::assets::builtin;
use crate::assets::resolver::AssetHandle;
use crate::convert::containers::add_container_background;
use crate::convert::context::InitCtx;
use crate::convert::refs::{
    apply_scale9, resolve_font, resolve_resource, resolve_sprite_frame,
};
use crate::convert::types::NodeType;
use crate::document::SourceNode;
use crate::foundation::core::{Color, NodeId};
use crate::scene::component::{
    AudioSource, BLEND_ONE_MINUS_SRC_ALPHA, BLEND_SRC_ALPHA, Button, ButtonTransition, EditBox,
    FillType, HorizontalAlign, InputFlag, InputMode, Label, ListDirection, Mask, Overflow,
    ParticleSystem, ProgressBar, ProgressMode, SizeMode, Sprite, SpriteType, StudioComponent,
    TiledMap, VerticalAlign, Widget,
};
use crate::scene::{Component, SceneGraph};

/// Attach `component`, reporting a rejected add as a diagnostic.
pub(crate) fn attach(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    id: NodeId,
    component: Component,
) -> bool {
    let type_name = component.type_name();
    match graph.add_component(id, component) {
        Ok(()) => true,
        Err(e) => {
            let name = graph.node(id).name.clone();
            cx.diag.warn(&name, type_name, e.to_string());
            false
        }
    }
}

/// Run the initializer registered for `node_type`, if any.
pub fn init_component(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    id: NodeId,
    node_type: &NodeType,
    data: &SourceNode,
) {
    match node_type {
        NodeType::Sprite => {
            init_sprite(cx, graph, id, data, SizeMode::Raw);
        }
        NodeType::ImageView => init_image_view(cx, graph, id, data),
        NodeType::Particle => {
            let file = resolve_resource(cx, data, builtin::DEFAULT_PARTICLE_URL);
            attach(cx, graph, id, Component::ParticleSystem(ParticleSystem { file }));
        }
        NodeType::GameMap => {
            let tmx_file = resolve_resource(cx, data, "");
            attach(cx, graph, id, Component::TiledMap(TiledMap { tmx_file }));
        }
        NodeType::SimpleAudio => {
            let clip = resolve_resource(cx, data, "");
            attach(cx, graph, id, Component::AudioSource(AudioSource { clip }));
        }
        NodeType::Button => init_button(cx, graph, id, data),
        NodeType::Text | NodeType::TextBMFont => init_label(cx, graph, id, data),
        NodeType::LoadingBar => init_progress_bar(cx, graph, id, data),
        NodeType::TextField => init_edit_box(cx, graph, id, data),
        NodeType::Panel => init_panel(cx, graph, id, data),
        NodeType::CheckBox => init_check_box(cx, graph, id, data),
        NodeType::TextAtlas => init_text_atlas(cx, graph, id, data),
        NodeType::Slider => init_slider(cx, graph, id, data),
        NodeType::ListView => {
            init_list_view(cx, graph, id, data);
            init_panel(cx, graph, id, data);
        }
        NodeType::PageView => {
            attach(cx, graph, id, Component::Studio(StudioComponent::PageView));
            init_panel(cx, graph, id, data);
        }
        NodeType::GameNode
        | NodeType::GameLayer
        | NodeType::SingleNode
        | NodeType::ProjectNode
        | NodeType::ScrollView
        | NodeType::Unrecognized(_) => {}
    }
}

fn frame(
    cx: &mut InitCtx<'_>,
    graph: &SceneGraph,
    id: NodeId,
    data: &SourceNode,
    field: &str,
    default_url: &str,
) -> Option<AssetHandle> {
    let name = graph.node(id).name.clone();
    resolve_sprite_frame(cx, data.child(field), default_url, &name, field)
}

fn init_sprite(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    id: NodeId,
    data: &SourceNode,
    size_mode: SizeMode,
) -> bool {
    let src = match data.child_int_or("BlendFunc", "Src", BLEND_SRC_ALPHA) {
        1 => BLEND_SRC_ALPHA,
        other => other,
    };
    let dst = data.child_int_or("BlendFunc", "Dst", BLEND_ONE_MINUS_SRC_ALPHA);
    let sprite_frame = frame(cx, graph, id, data, "FileData", "");
    let sprite = Sprite {
        sprite_frame,
        size_mode,
        trim: false,
        src_blend_factor: src,
        dst_blend_factor: dst,
        ..Sprite::default()
    };
    attach(cx, graph, id, Component::Sprite(sprite))
}

fn init_image_view(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    if !init_sprite(cx, graph, id, data, SizeMode::Custom) {
        return;
    }
    if !data.bool_or("Scale9Enable", false) {
        return;
    }
    let name = graph.node(id).name.clone();
    let Some(sprite) = graph.node_mut(id).sprite_mut() else {
        return;
    };
    let Some(handle) = sprite.sprite_frame.clone() else {
        return;
    };
    sprite.sprite_type = SpriteType::Sliced;
    apply_scale9(cx, data, &handle, &name);
}

fn init_button(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let scale9 = data.bool_or("Scale9Enable", false);
    let normal = frame(cx, graph, id, data, "NormalFileData", builtin::DEFAULT_BTN_NORMAL_URL);
    let pressed = frame(cx, graph, id, data, "PressedFileData", builtin::DEFAULT_BTN_PRESSED_URL);
    let disabled = frame(
        cx,
        graph,
        id,
        data,
        "DisabledFileData",
        builtin::DEFAULT_BTN_DISABLED_URL,
    );

    let button = Button {
        interactable: data.bool_or("DisplayState", true),
        transition: ButtonTransition::Sprite,
        normal_sprite: normal.clone(),
        hover_sprite: normal.clone(),
        pressed_sprite: pressed.clone(),
        disabled_sprite: disabled.clone(),
    };
    if !attach(cx, graph, id, Component::Button(button)) {
        return;
    }
    let sprite = Sprite {
        sprite_frame: normal.clone(),
        size_mode: SizeMode::Custom,
        sprite_type: if scale9 {
            SpriteType::Sliced
        } else {
            SpriteType::Simple
        },
        trim: false,
        ..Sprite::default()
    };
    attach(cx, graph, id, Component::Sprite(sprite));

    let text = data.str_or("ButtonText", "");
    if !text.is_empty() {
        add_button_label(cx, graph, id, data, text);
    }

    if scale9 {
        let name = graph.node(id).name.clone();
        let mut seen: Vec<AssetHandle> = Vec::new();
        for handle in [normal, pressed, disabled].into_iter().flatten() {
            if !seen.contains(&handle) {
                apply_scale9(cx, data, &handle, &name);
                seen.push(handle);
            }
        }
    }
}

fn add_button_label(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    button: NodeId,
    data: &SourceNode,
    text: &str,
) {
    let label_node = graph.create("Label");
    let size = graph.node(button).transform.size;
    {
        let n = graph.node_mut(label_node);
        n.transform.size = size;
        n.color = Color::from_ints(
            data.child_int_or("TextColor", "R", 65),
            data.child_int_or("TextColor", "G", 65),
            data.child_int_or("TextColor", "B", 70),
            255,
        );
        n.opacity = data.child_int_or("TextColor", "A", 255).clamp(0, 255) as u8;
    }
    if let Err(e) = graph.add_child(button, label_node) {
        cx.diag.warn("Label", "ButtonText", e.to_string());
        return;
    }

    let font = data.child("FontResource").and_then(|f| resolve_font(cx, f));
    let label = Label {
        string: text.to_owned(),
        font_size: data.int_or("FontSize", 14) as f64,
        horizontal_align: HorizontalAlign::Center,
        vertical_align: VerticalAlign::Center,
        font,
        ..Label::default()
    };
    attach(cx, graph, label_node, Component::Label(label));
    attach(cx, graph, label_node, Component::Widget(Widget::centered()));
}

fn init_label(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let mut label = Label {
        string: data.str_or("LabelText", "").to_owned(),
        line_height: 0.0,
        horizontal_align: match data.str_or("HorizontalAlignmentType", "") {
            "HT_Right" => HorizontalAlign::Right,
            "HT_Center" => HorizontalAlign::Center,
            _ => HorizontalAlign::Left,
        },
        vertical_align: match data.str_or("VerticalAlignmentType", "") {
            "VT_Bottom" => VerticalAlign::Bottom,
            "VT_Center" => VerticalAlign::Center,
            _ => VerticalAlign::Top,
        },
        ..Label::default()
    };
    if data.bool_or("IsCustomSize", false) {
        label.overflow = Overflow::Clamp;
        label.use_original_size = false;
    }

    let bmfont = data.child("LabelBMFontFile_CNB");
    let font_ref = bmfont.or_else(|| data.child("FontResource"));
    label.font = font_ref.and_then(|f| resolve_font(cx, f));

    let font_size = data.int_or("FontSize", -1);
    if font_size >= 0 {
        label.font_size = font_size as f64;
    } else if bmfont.is_some()
        && let Some(meta) = label.font.as_ref().and_then(|h| cx.resolver.read_metadata(h))
    {
        if let Some(size) = meta.get_f64("fontSize") {
            label.font_size = size;
        }
        if let Some(height) = meta.get_f64("commonHeight") {
            label.line_height = height;
        }
    }

    attach(cx, graph, id, Component::Label(label));
}

fn init_progress_bar(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let reverse = data.str_or("ProgressType", "") == "Right_To_Left";
    let bar_frame = frame(
        cx,
        graph,
        id,
        data,
        "ImageFileData",
        builtin::DEFAULT_PROGRESSBAR_URL,
    );
    let sprite = Sprite {
        sprite_frame: bar_frame,
        size_mode: SizeMode::Custom,
        sprite_type: SpriteType::Filled,
        trim: false,
        fill_type: Some(FillType::Horizontal),
        fill_start: if reverse { 1.0 } else { 0.0 },
        ..Sprite::default()
    };
    let has_bar = attach(cx, graph, id, Component::Sprite(sprite));

    let progress = ProgressBar {
        mode: ProgressMode::Filled,
        reverse,
        total_length: 1.0,
        progress: data.int_or("ProgressInfo", 80) as f64 / 100.0,
        bar_sprite: has_bar.then_some(id),
    };
    attach(cx, graph, id, Component::ProgressBar(progress));
}

fn init_edit_box(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let password = data.bool_or("PasswordEnable", false);
    let edit = EditBox {
        string: data.str_or("LabelText", "").to_owned(),
        placeholder: data.str_or("PlaceHolderText", "").to_owned(),
        font_color: Color::from_ints(
            data.child_int_or("CColor", "R", 255),
            data.child_int_or("CColor", "G", 255),
            data.child_int_or("CColor", "B", 255),
            data.child_int_or("CColor", "A", 255),
        ),
        font_size: data.int_or("FontSize", 20),
        line_height: 0.0,
        max_length: if data.bool_or("MaxLengthEnable", false) {
            data.int_or("MaxLengthText", 10)
        } else {
            -1
        },
        use_original_size: false,
        input_flag: password.then_some(InputFlag::Password),
        input_mode: password.then_some(InputMode::SingleLine),
    };
    attach(cx, graph, id, Component::EditBox(edit));
}

fn init_panel(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    if data.bool_or("ClipAble", false) {
        attach(cx, graph, id, Component::Mask(Mask { enabled: true }));
    }
    add_container_background(cx, graph, id, data);
}

fn init_check_box(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let studio = StudioComponent::CheckBox {
        normal_back_frame: frame(cx, graph, id, data, "NormalBackFileData", ""),
        pressed_back_frame: frame(cx, graph, id, data, "PressedBackFileData", ""),
        disable_back_frame: frame(cx, graph, id, data, "DisableBackFileData", ""),
        normal_frame: frame(cx, graph, id, data, "NodeNormalFileData", ""),
        disable_frame: frame(cx, graph, id, data, "NodeDisableFileData", ""),
        interactable: data.bool_or("DisplayState", true),
        checked: data.bool_or("CheckedState", false),
    };
    attach(cx, graph, id, Component::Studio(studio));
}

fn init_text_atlas(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let studio = StudioComponent::TextAtlas {
        atlas_frame: frame(cx, graph, id, data, "LabelAtlasFileImage_CNB", ""),
        first_char: data.str_or("StartChar", ".").to_owned(),
        char_width: data.int_or("CharWidth", 0),
        char_height: data.int_or("CharHeight", 0),
        string: data.str_or("LabelText", "").to_owned(),
    };
    attach(cx, graph, id, Component::Studio(studio));
}

fn init_slider(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let studio = StudioComponent::SliderBar {
        back_frame: frame(cx, graph, id, data, "BackGroundData", ""),
        bar_frame: frame(cx, graph, id, data, "ProgressBarData", ""),
        btn_normal_frame: frame(cx, graph, id, data, "BallNormalData", ""),
        btn_pressed_frame: frame(cx, graph, id, data, "BallPressedData", ""),
        btn_disabled_frame: frame(cx, graph, id, data, "BallDisabledData", ""),
        interactable: data.bool_or("DisplayState", true),
        progress: data.int_or("PercentInfo", 0) as f64 / 100.0,
    };
    attach(cx, graph, id, Component::Studio(studio));
}

fn init_list_view(cx: &mut InitCtx<'_>, graph: &mut SceneGraph, id: NodeId, data: &SourceNode) {
    let vertical = data.str_or("DirectionType", "") == "Vertical";
    let (direction, horizontal_align, vertical_align) = if vertical {
        let align = data.str_or("HorizontalType", "Left");
        let h = if align.contains("Center") {
            HorizontalAlign::Center
        } else if align.contains("Right") {
            HorizontalAlign::Right
        } else {
            HorizontalAlign::Left
        };
        (ListDirection::Vertical, Some(h), None)
    } else {
        let align = data.str_or("VerticalType", "Top");
        let v = if align.contains("Center") {
            VerticalAlign::Center
        } else if align.contains("Bottom") {
            VerticalAlign::Bottom
        } else {
            VerticalAlign::Top
        };
        (ListDirection::Horizontal, None, Some(v))
    };
    let studio = StudioComponent::ListView {
        inertia: data.bool_or("IsBounceEnabled", false),
        direction,
        horizontal_align,
        vertical_align,
        padding: data.int_or("ItemMargin", 0),
    };
    attach(cx, graph, id, Component::Studio(studio));
}

#[cfg(test)]
#[path = "../../tests/unit/convert/components.rs"]
mod tests;
