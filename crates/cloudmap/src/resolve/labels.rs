//! Binding free-floating text labels to unnamed nodes and areas.
//!
//! Labels are offered to nodes first and then, if still unused, to areas. A
//! label binds to the unnamed entity whose ellipse contains its anchor; when
//! several do, the one with the nearest center wins and ties go to the
//! entity created first. Each entity takes at most one label because a named
//! entity drops out of the candidate pool.

use log::trace;

use cloudmap_core::{
    geometry::{Ellipse, Point, nearest},
    model::{Area, Node},
    primitive::{Primitive, ShapeKind},
};

/// A text primitive waiting to be bound to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel<'a> {
    text: &'a str,
    anchor: Point,
    consumed: bool,
}

impl<'a> TextLabel<'a> {
    pub fn new(text: &'a str, anchor: Point) -> Self {
        Self {
            text,
            anchor,
            consumed: false,
        }
    }

    /// Builds a label from a text primitive with non-empty text and an anchor.
    pub fn from_primitive(primitive: &'a Primitive) -> Option<Self> {
        if primitive.kind() != ShapeKind::Text {
            return None;
        }
        let text = primitive.text().filter(|text| !text.trim().is_empty())?;
        Some(Self::new(text, primitive.text_anchor()?))
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Collects the labels of all text primitives in encounter order.
pub fn collect_labels(primitives: &[Primitive]) -> Vec<TextLabel<'_>> {
    primitives
        .iter()
        .filter_map(TextLabel::from_primitive)
        .collect()
}

/// An entity that can receive a label.
pub trait Labelled {
    fn ellipse(&self) -> Ellipse;
    fn has_name(&self) -> bool;
    fn set_name(&mut self, name: &str);
}

impl Labelled for Node {
    fn ellipse(&self) -> Ellipse {
        Node::ellipse(self)
    }

    fn has_name(&self) -> bool {
        Node::has_name(self)
    }

    fn set_name(&mut self, name: &str) {
        Node::set_name(self, name);
    }
}

impl Labelled for Area {
    fn ellipse(&self) -> Ellipse {
        Area::ellipse(self)
    }

    fn has_name(&self) -> bool {
        Area::has_name(self)
    }

    fn set_name(&mut self, name: &str) {
        Area::set_name(self, name);
    }
}

/// Offers every unconsumed label to `targets`, in label order.
///
/// Returns how many labels were bound in this pass.
pub fn bind_labels<T: Labelled>(labels: &mut [TextLabel<'_>], targets: &mut [T]) -> usize {
    let mut bound = 0;
    for label in labels.iter_mut().filter(|label| !label.consumed) {
        let anchor = label.anchor;
        let candidates = targets
            .iter()
            .enumerate()
            .filter(|(_, target)| !target.has_name() && target.ellipse().contains(anchor))
            .map(|(index, target)| (index, target.ellipse().center()));
        let Some((chosen, _)) = nearest(anchor, candidates, |(_, center)| Some(*center)) else {
            continue;
        };

        targets[chosen].set_name(label.text);
        label.consumed = true;
        bound += 1;
    }
    bound
}

/// Gives every still-unnamed node and area a generated name.
///
/// Nodes become `AP-NN` (two-digit, 1-based table position) and areas
/// `Area-N`.
pub fn fill_generated_names(nodes: &mut [Node], areas: &mut [Area]) {
    for (index, node) in nodes.iter_mut().enumerate() {
        if !node.has_name() {
            node.set_name(format!("AP-{:02}", index + 1));
        }
    }
    for (index, area) in areas.iter_mut().enumerate() {
        if !area.has_name() {
            area.set_name(format!("Area-{}", index + 1));
        }
    }
}

/// Runs both binding passes and the name fallback.
///
/// Returns the number of labels that found no entity; those are dropped.
pub fn resolve_labels(labels: &mut [TextLabel<'_>], nodes: &mut [Node], areas: &mut [Area]) -> usize {
    let to_nodes = bind_labels(labels, nodes);
    let to_areas = bind_labels(labels, areas);
    fill_generated_names(nodes, areas);

    let mut unmatched = 0;
    for label in labels.iter().filter(|label| !label.is_consumed()) {
        trace!(text = label.text(), anchor:? = label.anchor(); "Label matched no entity");
        unmatched += 1;
    }
    trace!(to_nodes, to_areas, unmatched; "Labels bound");
    unmatched
}

#[cfg(test)]
mod tests {
    use cloudmap_core::{
        geometry::Size,
        model::{AreaId, NodeId},
    };

    use super::*;

    fn node(index: usize, center: Point, radius: f64, name: &str) -> Node {
        Node::new(
            NodeId::from_index(index),
            format!("N{index}").as_str().into(),
            Ellipse::new(center, radius, radius),
            name,
        )
    }

    fn area(index: usize, center: Point, radius: f64, name: &str) -> Area {
        Area::new(
            AreaId::from_index(index),
            format!("A{index}").as_str().into(),
            Ellipse::new(center, radius, radius),
            name,
        )
    }

    #[test]
    fn test_label_binds_to_nearest_containing_node() {
        let mut nodes = vec![
            node(0, Point::new(0.0, 0.0), 10.0, ""),
            node(1, Point::new(5.0, 5.0), 10.0, ""),
        ];
        let mut labels = vec![TextLabel::new("Gateway", Point::new(1.0, 1.0))];

        let unmatched = resolve_labels(&mut labels, &mut nodes, &mut []);

        assert_eq!(unmatched, 0);
        assert_eq!(nodes[0].name(), "Gateway");
        assert_eq!(nodes[1].name(), "AP-02");
    }

    #[test]
    fn test_containing_beats_nearer_center() {
        // The second node's center is closer, but its ellipse does not reach the anchor.
        let mut nodes = vec![
            node(0, Point::new(0.0, 0.0), 10.0, ""),
            node(1, Point::new(9.0, 0.0), 1.0, ""),
        ];
        let mut labels = vec![TextLabel::new("Big", Point::new(7.0, 0.0))];

        bind_labels(&mut labels, &mut nodes);

        assert_eq!(nodes[0].name(), "Big");
        assert!(!nodes[1].has_name());
    }

    #[test]
    fn test_named_nodes_are_not_candidates() {
        let mut nodes = vec![
            node(0, Point::new(0.0, 0.0), 10.0, "Fixed"),
            node(1, Point::new(3.0, 0.0), 10.0, ""),
        ];
        let mut labels = vec![
            TextLabel::new("First", Point::new(0.0, 0.0)),
            TextLabel::new("Second", Point::new(0.0, 0.0)),
        ];

        let bound = bind_labels(&mut labels, &mut nodes);

        assert_eq!(bound, 1);
        assert_eq!(nodes[0].name(), "Fixed");
        assert_eq!(nodes[1].name(), "First");
        assert!(labels[0].is_consumed());
        assert!(!labels[1].is_consumed());
    }

    #[test]
    fn test_equal_distance_goes_to_first_node() {
        let mut nodes = vec![
            node(0, Point::new(-1.0, 0.0), 5.0, ""),
            node(1, Point::new(1.0, 0.0), 5.0, ""),
        ];
        let mut labels = vec![TextLabel::new("Tie", Point::new(0.0, 0.0))];

        bind_labels(&mut labels, &mut nodes);

        assert_eq!(nodes[0].name(), "Tie");
    }

    #[test]
    fn test_unused_labels_fall_through_to_areas() {
        let mut nodes = vec![node(0, Point::new(0.0, 0.0), 2.0, "")];
        let mut areas = vec![
            area(0, Point::new(0.0, 0.0), 50.0, ""),
            area(1, Point::new(200.0, 0.0), 50.0, ""),
        ];
        let mut labels = vec![
            TextLabel::new("Core", Point::new(0.5, 0.0)),
            TextLabel::new("Campus", Point::new(30.0, 0.0)),
            TextLabel::new("Nowhere", Point::new(1000.0, 1000.0)),
        ];

        let unmatched = resolve_labels(&mut labels, &mut nodes, &mut areas);

        assert_eq!(nodes[0].name(), "Core");
        assert_eq!(areas[0].name(), "Campus");
        assert_eq!(areas[1].name(), "Area-2");
        assert_eq!(unmatched, 1);
    }

    #[test]
    fn test_generated_names_without_labels() {
        let mut nodes: Vec<Node> = (0..11)
            .map(|i| node(i, Point::new(i as f64 * 100.0, 0.0), 1.0, ""))
            .collect();
        nodes[3].set_name("Named");
        let mut areas = vec![area(0, Point::new(0.0, 0.0), 1.0, "   ")];

        let unmatched = resolve_labels(&mut [], &mut nodes, &mut areas);

        assert_eq!(unmatched, 0);
        assert_eq!(nodes[0].name(), "AP-01");
        assert_eq!(nodes[3].name(), "Named");
        assert_eq!(nodes[10].name(), "AP-11");
        assert_eq!(areas[0].name(), "Area-1");
        assert!(nodes.iter().all(Node::has_name));
    }

    #[test]
    fn test_collect_labels_skips_empty_and_unanchored() {
        let primitives = vec![
            Primitive::new(ShapeKind::Text, "O1")
                .with_text("Uplink")
                .with_text_anchor(Point::new(1.0, 2.0)),
            Primitive::new(ShapeKind::Text, "O2").with_text_anchor(Point::new(0.0, 0.0)),
            Primitive::new(ShapeKind::Text, "O3").with_text("No anchor"),
            Primitive::new(ShapeKind::Ellipse, "O4")
                .with_text("Shape label")
                .with_text_anchor(Point::new(0.0, 0.0))
                .with_size(Size::new(1.0, 1.0)),
        ];

        let labels = collect_labels(&primitives);

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text(), "Uplink");
        assert_eq!(labels[0].anchor(), Point::new(1.0, 2.0));
    }
}
