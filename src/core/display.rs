//=========================================================================
// Display List
//=========================================================================
//
// Logical scene graph owned by a stage.
//
// Architecture:
//   DisplayList
//     └─ objects: Vec<DisplayObject>   (indexed by ElementId)
//
// Every object exposes the `Displayable` capability set (position,
// visibility, z-order). Draw and hit-test order is (depth, creation
// order): later objects sit above earlier ones at equal depth.
//
//=========================================================================

//=== ElementId ===========================================================

/// Handle to an object in a [`DisplayList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of the element in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

//=== Displayable =========================================================

/// Capabilities shared by everything placed on a stage.
pub trait Displayable {
    fn position(&self) -> (f32, f32);
    fn set_position(&mut self, x: f32, y: f32);

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Z-order; higher values are drawn and hit-tested first.
    fn depth(&self) -> i32;
    fn set_depth(&mut self, depth: i32);
}

//=== Element Kinds =======================================================

/// Frame selector for sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRef {
    /// Frame index into a sprite sheet.
    Index(usize),

    /// Named frame in an atlas.
    Named(String),
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font and color settings for text elements.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f32,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_thickness: f32,
    pub align: TextAlign,
}

impl TextStyle {
    /// Style with the given size and defaults elsewhere.
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    pub fn with_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, thickness: f32) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_thickness = thickness;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Approximate layout box for `content`.
    ///
    /// No font metrics are available to the core, so glyphs are treated
    /// as half an em wide.
    pub fn measure(&self, content: &str) -> (f32, f32) {
        let glyphs = content.chars().count() as f32;
        (glyphs * self.font_size * 0.5, self.font_size * 1.2)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            fill: "#ffffff".to_string(),
            stroke: None,
            stroke_thickness: 0.0,
            align: TextAlign::Left,
        }
    }
}

/// What an element draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Image {
        texture: String,
    },
    Sprite {
        texture: String,
        frame: FrameRef,
    },
    Text {
        content: String,
        style: TextStyle,
    },
    Rectangle {
        fill: Option<(u32, f32)>,
        stroke: Option<(f32, u32)>,
    },
}

//=== DisplayObject =======================================================

/// A positioned, drawable element.
///
/// `active` gates input routing; `visible` gates both drawing and input.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayObject {
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub origin: (f32, f32),
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation: f32,
    pub alpha: f32,
    /// Progress of the reveal effect on text, 0 = hidden, 1 = revealed.
    pub reveal: f32,
    pub visible: bool,
    pub active: bool,
    pub depth: i32,
}

impl DisplayObject {
    fn new(kind: ElementKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            origin: (0.5, 0.5),
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            alpha: 1.0,
            reveal: 1.0,
            visible: true,
            active: true,
            depth: 0,
        }
    }

    //--- Constructors -----------------------------------------------------

    pub fn image(x: f32, y: f32, texture: &str, size: (f32, f32)) -> Self {
        let kind = ElementKind::Image {
            texture: texture.to_string(),
        };
        Self::new(kind, x, y, size.0, size.1)
    }

    pub fn sprite(x: f32, y: f32, texture: &str, frame: FrameRef, size: (f32, f32)) -> Self {
        let kind = ElementKind::Sprite {
            texture: texture.to_string(),
            frame,
        };
        Self::new(kind, x, y, size.0, size.1)
    }

    /// Text elements size themselves from their style.
    pub fn text(x: f32, y: f32, content: &str, style: TextStyle) -> Self {
        let (width, height) = style.measure(content);
        let kind = ElementKind::Text {
            content: content.to_string(),
            style,
        };
        let mut object = Self::new(kind, x, y, width, height);
        object.origin = (0.0, 0.0);
        object
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        let kind = ElementKind::Rectangle {
            fill: None,
            stroke: None,
        };
        Self::new(kind, x, y, width, height)
    }

    //--- Builders ---------------------------------------------------------

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale_x = scale;
        self.scale_y = scale;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_fill(mut self, color: u32, alpha: f32) -> Self {
        if let ElementKind::Rectangle { fill, .. } = &mut self.kind {
            *fill = Some((color, alpha));
        }
        self
    }

    pub fn with_stroke(mut self, width: f32, color: u32) -> Self {
        if let ElementKind::Rectangle { stroke, .. } = &mut self.kind {
            *stroke = Some((width, color));
        }
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    //--- Mutators ---------------------------------------------------------

    /// Replaces the text fill color. No-op for non-text elements.
    pub fn set_text_fill(&mut self, color: &str) {
        if let ElementKind::Text { style, .. } = &mut self.kind {
            style.fill = color.to_string();
        }
    }

    /// Current text fill, if this is a text element.
    pub fn text_fill(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { style, .. } => Some(style.fill.as_str()),
            _ => None,
        }
    }

    /// Switches the displayed frame. No-op for non-sprites.
    pub fn set_frame(&mut self, new_frame: FrameRef) {
        if let ElementKind::Sprite { frame, .. } = &mut self.kind {
            *frame = new_frame;
        }
    }

    pub fn frame(&self) -> Option<&FrameRef> {
        match &self.kind {
            ElementKind::Sprite { frame, .. } => Some(frame),
            _ => None,
        }
    }

    //--- Hit Testing ------------------------------------------------------

    /// Returns `true` if the canvas point lies inside the scaled bounds.
    ///
    /// Rotation is ignored.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let width = self.width * self.scale_x.abs();
        let height = self.height * self.scale_y.abs();
        let left = self.x - width * self.origin.0;
        let top = self.y - height * self.origin.1;
        px >= left && px <= left + width && py >= top && py <= top + height
    }

    /// Whether the element currently accepts pointer input.
    pub fn is_interactive(&self) -> bool {
        self.visible && self.active
    }
}

impl Displayable for DisplayObject {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn depth(&self) -> i32 {
        self.depth
    }

    fn set_depth(&mut self, depth: i32) {
        self.depth = depth;
    }
}

//=== DisplayList =========================================================

/// Stage-owned collection of display objects.
///
/// Elements are never removed individually; the whole list is dropped
/// with its stage.
#[derive(Debug, Default)]
pub struct DisplayList {
    objects: Vec<DisplayObject>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object above everything created so far at equal depth.
    pub fn add(&mut self, object: DisplayObject) -> ElementId {
        self.objects.push(object);
        ElementId(self.objects.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&DisplayObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut DisplayObject> {
        self.objects.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Element ids in draw order (bottom first).
    pub fn draw_order(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = (0..self.objects.len()).map(ElementId).collect();
        ids.sort_by_key(|id| (self.objects[id.0].depth, id.0));
        ids
    }

    /// Visible elements in draw order, for a renderer to consume.
    pub fn visible(&self) -> impl Iterator<Item = (ElementId, &DisplayObject)> {
        self.draw_order()
            .into_iter()
            .map(move |id| (id, &self.objects[id.0]))
            .filter(|(_, object)| object.visible)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_origin_hit_test() {
        let button = DisplayObject::rectangle(100.0, 100.0, 40.0, 20.0);
        assert!(button.contains(100.0, 100.0));
        assert!(button.contains(80.0, 90.0));
        assert!(!button.contains(79.0, 100.0));
        assert!(!button.contains(100.0, 111.0));
    }

    #[test]
    fn scale_grows_hit_area() {
        let sprite = DisplayObject::sprite(0.0, 0.0, "coin", FrameRef::Index(0), (10.0, 10.0))
            .with_scale(2.0);
        assert!(sprite.contains(9.0, 9.0));
        assert!(!sprite.contains(11.0, 0.0));
    }

    #[test]
    fn text_uses_top_left_origin_by_default() {
        let text = DisplayObject::text(10.0, 10.0, "abcd", TextStyle::sized(20.0));
        assert_eq!(text.origin, (0.0, 0.0));
        assert_eq!((text.width, text.height), (40.0, 24.0));
        assert!(text.contains(11.0, 11.0));
        assert!(!text.contains(9.0, 11.0));
    }

    #[test]
    fn hidden_or_inactive_elements_are_not_interactive() {
        let mut object = DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0);
        assert!(object.is_interactive());
        object.set_visible(false);
        assert!(!object.is_interactive());
        object.set_visible(true);
        object.active = false;
        assert!(!object.is_interactive());
    }

    #[test]
    fn draw_order_respects_depth_then_creation() {
        let mut list = DisplayList::new();
        let a = list.add(DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0));
        let b = list.add(DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0));
        let c = list.add(DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0));
        if let Some(object) = list.get_mut(a) {
            object.set_depth(5);
        }
        assert_eq!(list.draw_order(), vec![b, c, a]);
    }

    #[test]
    fn visible_iterator_skips_hidden_elements() {
        let mut list = DisplayList::new();
        list.add(DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0).hidden());
        let shown = list.add(DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0));
        let ids: Vec<ElementId> = list.visible().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![shown]);
    }

    #[test]
    fn fill_and_frame_mutators_ignore_wrong_kinds() {
        let mut rect = DisplayObject::rectangle(0.0, 0.0, 1.0, 1.0);
        rect.set_text_fill("#ff0");
        rect.set_frame(FrameRef::Index(3));
        assert_eq!(rect.text_fill(), None);
        assert_eq!(rect.frame(), None);
    }
}
