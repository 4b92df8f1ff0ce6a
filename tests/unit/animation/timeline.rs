use super::*;
use crate::assets::AssetLibrary;
use crate::assets::resolver::AssetResolver;
use crate::document::parse_markup;
use crate::foundation::core::Size;
use crate::foundation::diag::Diagnostics;
use crate::scene::component::Sprite;
use crate::scene::Component;

struct Fixture {
    lib: AssetLibrary,
    diag: Diagnostics,
    graph: SceneGraph,
    tags: ActionTagIndex,
}

impl Fixture {
    /// `root` (200x100, anchor 0.5) with a sprite child `root/hero` tagged 7.
    fn new() -> Self {
        let mut graph = SceneGraph::new();
        let root = graph.create("root");
        {
            let t = &mut graph.node_mut(root).transform;
            t.size = Size::new(200.0, 100.0);
            t.anchor = Vec2::new(0.5, 0.5);
        }
        let hero = graph.create("hero");
        graph.add_child(root, hero).unwrap();
        graph
            .add_component(hero, Component::Sprite(Sprite::default()))
            .unwrap();
        let plain = graph.create("plain");
        graph.add_child(root, plain).unwrap();

        let mut tags = ActionTagIndex::default();
        tags.insert("7", "hero".to_owned(), hero);
        tags.insert("8", "plain".to_owned(), plain);

        let mut lib = AssetLibrary::new();
        lib.register("db://assets/Demo/run/1.png/1", None);
        Self {
            lib,
            diag: Diagnostics::new(),
            graph,
            tags,
        }
    }

    fn extract(&mut self, xml: &str) -> TimelineData {
        let animation = parse_markup(xml.as_bytes()).unwrap();
        let mut cx = InitCtx {
            resolver: &mut self.lib,
            diag: &mut self.diag,
            root_url: "db://assets/Demo",
        };
        extract(&animation, &self.tags, &self.graph, &mut cx, "triggerAnimationEvent")
    }
}

#[test]
fn position_track_is_converted_against_the_parent() {
    let mut fx = Fixture::new();
    let data = fx.extract(
        r#"<Animation Duration="60">
             <Timeline ActionTag="7" Property="Position">
               <PointFrame FrameIndex="0" X="100" Y="50"><EasingData Type="0" /></PointFrame>
               <PointFrame FrameIndex="30" X="0" Y="0"><EasingData Type="6" /></PointFrame>
             </Timeline>
           </Animation>"#,
    );
    let track = &data.curves.get("hero").unwrap().props["position"];
    assert_eq!(track.len(), 2);
    assert_eq!(track[0].value, KeyValue::Vec2([0.0, 0.0]));
    assert_eq!(track[0].curve, None);
    assert_eq!(track[1].frame, 30);
    assert_eq!(track[1].value, KeyValue::Vec2([-100.0, -50.0]));
    assert_eq!(
        track[1].curve,
        Some(crate::animation::ease::EasingSpec::Named("quadInOut".into()))
    );
}

#[test]
fn scale_anchor_color_alpha_and_visibility() {
    let mut fx = Fixture::new();
    let data = fx.extract(
        r#"<Animation>
             <Timeline ActionTag="8" Property="Scale">
               <ScaleFrame FrameIndex="0" X="2" Y="3" />
             </Timeline>
             <Timeline ActionTag="8" Property="AnchorPoint">
               <ScaleFrame FrameIndex="0" X="0.25" />
             </Timeline>
             <Timeline ActionTag="8" Property="CColor">
               <ColorFrame FrameIndex="5"><Color R="10" G="20" /></ColorFrame>
             </Timeline>
             <Timeline ActionTag="8" Property="Alpha">
               <IntFrame FrameIndex="5" />
             </Timeline>
             <Timeline ActionTag="8" Property="VisibleForFrame">
               <BoolFrame FrameIndex="9" Value="False"><EasingData Type="3" /></BoolFrame>
             </Timeline>
           </Animation>"#,
    );
    let props = &data.curves.get("plain").unwrap().props;
    assert_eq!(props["scaleX"][0].value, KeyValue::Number(2.0));
    assert_eq!(props["scaleY"][0].value, KeyValue::Number(3.0));
    assert_eq!(props["anchorX"][0].value, KeyValue::Number(0.25));
    assert_eq!(props["anchorY"][0].value, KeyValue::Number(0.0));
    assert_eq!(props["color"][0].value, KeyValue::Color(Color::rgb(10, 20, 255)));
    assert_eq!(props["opacity"][0].value, KeyValue::Number(255.0));
    assert_eq!(props["active"][0].value, KeyValue::Bool(false));
    assert_eq!(props["active"][0].curve, None);
}

#[test]
fn unregistered_tags_produce_nothing() {
    let mut fx = Fixture::new();
    let data = fx.extract(
        r#"<Animation>
             <Timeline ActionTag="99" Property="Position">
               <PointFrame FrameIndex="0" X="1" Y="1" />
             </Timeline>
             <Timeline ActionTag="99" Property="Bogus" />
           </Animation>"#,
    );
    assert!(data.curves.is_empty());
    assert!(data.events.is_empty());
    assert!(fx.diag.is_empty());
}

#[test]
fn unsupported_properties_are_reported_and_empty_ones_ignored() {
    let mut fx = Fixture::new();
    let data = fx.extract(
        r#"<Animation>
             <Timeline ActionTag="8" Property="BlendFunc"><BlendFuncFrame FrameIndex="0" /></Timeline>
             <Timeline ActionTag="8" />
           </Animation>"#,
    );
    assert!(data.curves.is_empty());
    assert_eq!(fx.diag.len(), 1);
    assert_eq!(fx.diag.entries()[0].field, "BlendFunc");
}

#[test]
fn frame_events_accumulate_across_timelines() {
    let mut fx = Fixture::new();
    let data = fx.extract(
        r#"<Animation>
             <Timeline ActionTag="7" Property="FrameEvent">
               <EventFrame FrameIndex="10" Value="hit" />
               <EventFrame FrameIndex="20" />
             </Timeline>
             <Timeline ActionTag="8" Property="FrameEvent">
               <EventFrame FrameIndex="5" Value="step" />
             </Timeline>
           </Animation>"#,
    );
    let frames: Vec<_> = data.events.iter().map(|e| e.frame).collect();
    assert_eq!(frames, vec![10, 20, 5]);
    assert_eq!(data.events[0].params, vec!["hit"]);
    assert!(data.events[1].params.is_empty());
    assert!(data.events.iter().all(|e| e.func == "triggerAnimationEvent"));
}

#[test]
fn sprite_frame_tracks_need_a_sprite_and_skip_unresolved_frames() {
    let mut fx = Fixture::new();
    let xml = |tag: &str| {
        format!(
            r#"<Animation>
                 <Timeline ActionTag="{tag}" Property="FileData">
                   <TextureFrame FrameIndex="0"><TextureFile Type="Normal" Path="run/1.png" /></TextureFrame>
                   <TextureFrame FrameIndex="4"><TextureFile Type="Normal" Path="run/2.png" /></TextureFrame>
                 </Timeline>
               </Animation>"#
        )
    };
    let data = fx.extract(&xml("7"));
    let track = &data.curves.get("hero").unwrap().comps[SPRITE_COMPONENT]["spriteFrame"];
    assert_eq!(track.len(), 1);
    assert_eq!(
        track[0].value,
        KeyValue::Asset(fx.lib.resolve_handle("db://assets/Demo/run/1.png/1").unwrap())
    );
    assert_eq!(fx.diag.for_field("FileData").count(), 1);

    let data = fx.extract(&xml("8"));
    assert!(data.curves.get("plain").is_none());
}

#[test]
fn has_timelines_checks_for_timeline_children() {
    let empty = parse_markup(br#"<Animation Duration="10" />"#).unwrap();
    assert!(!has_timelines(&empty));
    let one = parse_markup(br#"<Animation><Timeline ActionTag="1" /></Animation>"#).unwrap();
    assert!(has_timelines(&one));
}
