//! Container scaffolding: panel backgrounds and scroll views.

use crate::assets::builtin;
use crate::assets::resolver::AssetHandle;
use crate::convert::components::attach;
use crate::convert::context::InitCtx;
use crate::convert::props::{apply_base_properties, relocate};
use crate::convert::refs::{apply_scale9, resolve_sprite_frame};
use crate::convert::types::NodeType;
use crate::document::SourceNode;
use crate::foundation::core::{Color, NodeId, Size, Vec2};
use crate::scene::component::{
    EdgeConstraint, Mask, ScrollDirection, ScrollView, Scrollbar, SizeMode, Sprite, SpriteType,
    Widget,
};
use crate::scene::{Component, SceneGraph};

/// Thickness of generated scroll bars.
const SCROLLBAR_THICKNESS: f64 = 15.0;
/// Handle length relative to the scroll view.
const SCROLLBAR_HANDLE_RATIO: f64 = 0.7;

/// Add a centered `background` child when the container has an image or a solid color fill.
pub fn add_container_background(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    container: NodeId,
    data: &SourceNode,
) {
    let container_size = graph.node(container).transform.size;
    let container_name = graph.node(container).name.clone();

    let background = if let Some(file_data) = data.child("FileData") {
        let back = graph.create("background");
        let mut sprite = Sprite {
            trim: false,
            ..Sprite::default()
        };
        let frame = resolve_sprite_frame(
            cx,
            Some(file_data),
            builtin::DEFAULT_PANEL_URL,
            &container_name,
            "FileData",
        );
        if let Some(handle) = frame {
            if data.bool_or("Scale9Enable", false) {
                graph.node_mut(back).transform.size = container_size;
                sprite.size_mode = SizeMode::Custom;
                sprite.sprite_type = SpriteType::Sliced;
                apply_scale9(cx, data, &handle, &container_name);
            }
            sprite.sprite_frame = Some(handle);
        }
        attach(cx, graph, back, Component::Sprite(sprite));
        Some(back)
    } else if data.int_or("ComboBoxIndex", 0) == 1 {
        let back = graph.create("background");
        {
            let n = graph.node_mut(back);
            n.transform.size = container_size;
            n.color = Color::from_ints(
                data.child_int_or("SingleColor", "R", 255),
                data.child_int_or("SingleColor", "G", 255),
                data.child_int_or("SingleColor", "B", 255),
                255,
            );
            n.opacity = data.int_or("BackColorAlpha", 255).clamp(0, 255) as u8;
        }
        let sprite = Sprite {
            sprite_frame: cx.resolver.resolve_handle(builtin::DEFAULT_SPLASH_SPRITE_URL),
            size_mode: SizeMode::Custom,
            trim: false,
            ..Sprite::default()
        };
        attach(cx, graph, back, Component::Sprite(sprite));
        Some(back)
    } else {
        None
    };

    if let Some(back) = background {
        if let Err(e) = graph.add_child(container, back) {
            cx.diag.warn(&container_name, "background", e.to_string());
            return;
        }
        attach(cx, graph, back, Component::Widget(Widget::centered()));
    }
}

/// Build a scroll view. Returns `(scroll node, content node)`: the scroll node faces the
/// parent, authored children go below the content node.
pub fn create_scroll_view(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    data: &SourceNode,
    name: &str,
) -> (NodeId, NodeId) {
    let scroll = graph.create(name);
    apply_base_properties(graph, scroll, data, &NodeType::ScrollView, name);

    let direction = data.str_or("ScrollDirectionType", "Vertical");
    let mut view = ScrollView {
        inertia: data.bool_or("IsBounceEnabled", false),
        vertical: direction.contains("Vertical"),
        horizontal: direction.contains("Horizontal"),
        ..ScrollView::default()
    };
    if data.bool_or("ClipAble", false) {
        attach(cx, graph, scroll, Component::Mask(Mask { enabled: true }));
    }

    let view_size = graph.node(scroll).transform.size;
    let content = graph.create("content");
    {
        let n = graph.node_mut(content);
        n.transform.size = Size::new(
            data.child_int_or("InnerNodeSize", "Width", view_size.width as i64) as f64,
            data.child_int_or("InnerNodeSize", "Height", view_size.height as i64) as f64,
        );
        n.transform.anchor = Vec2::new(0.0, 1.0);
        n.transform.position = Vec2::new(0.0, view_size.height);
    }

    add_container_background(cx, graph, scroll, data);

    if let Err(e) = graph.add_child(scroll, content) {
        cx.diag.warn(name, "content", e.to_string());
    } else {
        relocate(graph, content);
        view.content = Some(content);
    }

    if view.vertical {
        view.vertical_scrollbar =
            add_scrollbar(cx, graph, scroll, ScrollDirection::Vertical, view_size);
    }
    if view.horizontal {
        view.horizontal_scrollbar =
            add_scrollbar(cx, graph, scroll, ScrollDirection::Horizontal, view_size);
    }
    attach(cx, graph, scroll, Component::ScrollView(view));

    (scroll, content)
}

fn add_scrollbar(
    cx: &mut InitCtx<'_>,
    graph: &mut SceneGraph,
    scroll: NodeId,
    direction: ScrollDirection,
    view_size: Size,
) -> Option<NodeId> {
    let (name, bar_size, handle_size, url) = match direction {
        ScrollDirection::Horizontal => (
            "hScrollBar",
            Size::new(view_size.width, SCROLLBAR_THICKNESS),
            Size::new(view_size.width * SCROLLBAR_HANDLE_RATIO, SCROLLBAR_THICKNESS),
            builtin::DEFAULT_HSCROLLBAR_URL,
        ),
        ScrollDirection::Vertical => (
            "vScrollBar",
            Size::new(SCROLLBAR_THICKNESS, view_size.height),
            Size::new(SCROLLBAR_THICKNESS, view_size.height * SCROLLBAR_HANDLE_RATIO),
            builtin::DEFAULT_VSCROLLBAR_URL,
        ),
    };

    let bar = graph.create(name);
    graph.node_mut(bar).transform.size = bar_size;
    let handle = graph.create("bar");
    graph.node_mut(handle).transform.size = handle_size;
    if let Err(e) = graph.add_child(bar, handle) {
        cx.diag.warn(name, "bar", e.to_string());
        return None;
    }
    let frame: Option<AssetHandle> = cx.resolver.resolve_handle(url);
    attach(
        cx,
        graph,
        handle,
        Component::Sprite(Sprite {
            sprite_frame: frame,
            size_mode: SizeMode::Custom,
            sprite_type: SpriteType::Sliced,
            trim: false,
            ..Sprite::default()
        }),
    );

    attach(
        cx,
        graph,
        bar,
        Component::Scrollbar(Scrollbar {
            direction,
            handle: Some(handle),
        }),
    );
    let edge = Some(EdgeConstraint::absolute(0.0));
    let vertical = direction == ScrollDirection::Vertical;
    attach(
        cx,
        graph,
        bar,
        Component::Widget(Widget {
            right: edge,
            bottom: edge,
            top: if vertical { edge } else { None },
            left: if vertical { None } else { edge },
            ..Widget::default()
        }),
    );

    if let Err(e) = graph.add_child(scroll, bar) {
        cx.diag.warn(name, "scrollbar", e.to_string());
        return None;
    }
    Some(bar)
}

#[cfg(test)]
#[path = "../../tests/unit/convert/containers.rs"]
mod tests;
