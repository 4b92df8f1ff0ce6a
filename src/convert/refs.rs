//! Resolution of studio file references to asset handles.

use crate::assets::builtin;
use crate::assets::resolver::AssetHandle;
use crate::assets::url::{basename_no_ext, join_url};
use crate::convert::context::InitCtx;
use crate::document::SourceNode;

/// URL of the sprite frame a `FileData`-like element points at.
///
/// Plist sub-images live below the plist (`/` in the frame name becomes `-`), plain images
/// expose a frame named after the image stem. Anything else uses `default_url`.
pub fn sprite_frame_url(file_data: Option<&SourceNode>, default_url: &str, root_url: &str) -> String {
    let Some(fd) = file_data else {
        return default_url.to_owned();
    };
    let path = fd.str_or("Path", "");
    match fd.str_or("Type", "Default") {
        "PlistSubImage" => {
            let plist = fd.str_or("Plist", "");
            if plist.is_empty() || path.is_empty() {
                return default_url.to_owned();
            }
            join_url(&join_url(root_url, plist), &path.replace(['/', '\\'], "-"))
        }
        "Normal" | "MarkedSubImage" if !path.is_empty() => {
            let image_url = join_url(root_url, path);
            let stem = basename_no_ext(&image_url).to_owned();
            join_url(&image_url, &stem)
        }
        _ => default_url.to_owned(),
    }
}

/// Resolve a sprite frame reference. Unresolvable or missing frames are reported and yield
/// `None`; a reference with neither data nor default is silently empty.
pub fn resolve_sprite_frame(
    cx: &mut InitCtx<'_>,
    file_data: Option<&SourceNode>,
    default_url: &str,
    node: &str,
    field: &str,
) -> Option<AssetHandle> {
    if file_data.is_none() && default_url.is_empty() {
        return None;
    }
    let url = sprite_frame_url(file_data, default_url, cx.root_url);
    let handle = if url.is_empty() {
        None
    } else {
        cx.resolver.resolve_handle(&url)
    };
    let Some(handle) = handle else {
        cx.diag.warn(node, field, format!("sprite frame '{url}' is not registered"));
        return None;
    };
    if !cx.resolver.handle_exists(&handle) {
        cx.diag.warn(node, field, format!("sprite frame '{url}' no longer exists"));
        return None;
    }
    Some(handle)
}

/// Resolve the `FileData` resource of particles, tile maps and audio.
///
/// Only `Normal` references point into the project; other types fall back to `default_url`,
/// which may be empty. Missing assets leave the reference unset.
pub fn resolve_resource(
    cx: &mut InitCtx<'_>,
    data: &SourceNode,
    default_url: &str,
) -> Option<AssetHandle> {
    let url = match data.child_str_or("FileData", "Type", "Default") {
        "Normal" => join_url(cx.root_url, data.child_str_or("FileData", "Path", "")),
        _ => default_url.to_owned(),
    };
    resolve_existing(cx, &url)
}

/// Resolve a font file referenced by `Path`, relative to the resource root.
pub fn resolve_font(cx: &mut InitCtx<'_>, font_ref: &SourceNode) -> Option<AssetHandle> {
    let url = join_url(cx.root_url, font_ref.str_or("Path", ""));
    resolve_existing(cx, &url)
}

fn resolve_existing(cx: &mut InitCtx<'_>, url: &str) -> Option<AssetHandle> {
    if url.is_empty() {
        return None;
    }
    let handle = cx.resolver.resolve_handle(url)?;
    cx.resolver.handle_exists(&handle).then_some(handle)
}

/// Write 9-slice borders for `handle` from the node's `Scale9*` attributes.
///
/// Borders are clamped at zero. Built-in assets are read-only and left untouched.
pub fn apply_scale9(cx: &mut InitCtx<'_>, data: &SourceNode, handle: &AssetHandle, node: &str) {
    let Some(mut meta) = cx.resolver.read_metadata(handle) else {
        return;
    };
    if builtin::is_internal(&meta.url) {
        return;
    }

    let raw_w = meta.get_i64("rawWidth").unwrap_or(0);
    let raw_h = meta.get_i64("rawHeight").unwrap_or(0);
    let x = data.int_or("Scale9OriginX", 0);
    let y = data.int_or("Scale9OriginY", 0);
    let w = data.int_or("Scale9Width", raw_w);
    let h = data.int_or("Scale9Height", raw_h);

    meta.set("trimThreshold", -1);
    meta.set("borderTop", y);
    meta.set("borderBottom", raw_h.saturating_sub(y).saturating_sub(h).max(0));
    meta.set("borderLeft", x);
    meta.set("borderRight", raw_w.saturating_sub(x).saturating_sub(w).max(0));

    if let Err(e) = cx.resolver.write_metadata(handle, meta) {
        cx.diag.warn(node, "Scale9Enable", format!("cannot update slice borders: {e}"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/refs.rs"]
mod tests;
