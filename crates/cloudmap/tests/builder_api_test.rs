//! Integration tests for the ImportBuilder API
//!
//! Each test builds a small Dia document, imports it and checks the
//! resolved model.

use serde_json::Value;

use cloudmap::{CloudmapError, ImportBuilder, config::AppConfig, model::Model};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dia:diagram xmlns:dia="http://www.lysator.liu.se/~alla/dia/">
  <dia:layer name="Background" visible="true" active="true">
"#;

const FOOTER: &str = "  </dia:layer>\n</dia:diagram>\n";

fn document(objects: &[String]) -> String {
    format!("{HEADER}{}{FOOTER}", objects.concat())
}

/// A region shape centered at (`cx`, `cy`) with radius `r`.
fn region(kind: &str, id: &str, cx: f64, cy: f64, r: f64, fill: Option<&str>) -> String {
    let fill = fill
        .map(|color| {
            format!(r#"<dia:attribute name="fill_colour"><dia:color val="{color}"/></dia:attribute>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<dia:object type="{kind}" version="0" id="{id}">
  <dia:attribute name="elem_corner"><dia:point val="{},{}"/></dia:attribute>
  <dia:attribute name="elem_width"><dia:real val="{}"/></dia:attribute>
  <dia:attribute name="elem_height"><dia:real val="{}"/></dia:attribute>
  {fill}
</dia:object>
"#,
        cx - r,
        cy - r,
        2.0 * r,
        2.0 * r,
    )
}

fn node(id: &str, cx: f64, cy: f64, r: f64) -> String {
    region("Flowchart - Ellipse", id, cx, cy, r, None)
}

fn area(id: &str, cx: f64, cy: f64, r: f64) -> String {
    region("Network - Cloud", id, cx, cy, r, Some("#FFFFFF"))
}

fn label(id: &str, text: &str, x: f64, y: f64) -> String {
    format!(
        r##"<dia:object type="Standard - Text" version="1" id="{id}">
  <dia:attribute name="text">
    <dia:composite type="text">
      <dia:attribute name="string"><dia:string>#{text}#</dia:string></dia:attribute>
      <dia:attribute name="pos"><dia:point val="{x},{y}"/></dia:attribute>
    </dia:composite>
  </dia:attribute>
</dia:object>
"##
    )
}

fn line(id: &str, from: (f64, f64), to: (f64, f64), extra: &str) -> String {
    format!(
        r#"<dia:object type="Standard - Line" version="0" id="{id}">
  <dia:attribute name="conn_endpoints">
    <dia:point val="{},{}"/><dia:point val="{},{}"/>
  </dia:attribute>
  {extra}
</dia:object>
"#,
        from.0, from.1, to.0, to.1
    )
}

fn connections(from: &str, to: &str) -> String {
    format!(
        r#"<dia:connections>
    <dia:connection handle="0" to="{from}" connection="0"/>
    <dia:connection handle="1" to="{to}" connection="0"/>
  </dia:connections>"#
    )
}

fn import(objects: &[String]) -> Model {
    ImportBuilder::default()
        .import(&document(objects))
        .expect("Failed to import")
}

#[test]
fn test_builder_api_exists() {
    let _builder = ImportBuilder::default();
    let _builder = ImportBuilder::new(AppConfig::default());
}

#[test]
fn test_nested_node_resolves_to_area() {
    let model = import(&[area("O0", 0.0, 0.0, 10.0), node("O1", 0.0, 0.0, 2.0)]);

    assert_eq!(model.areas().len(), 1);
    assert_eq!(model.nodes().len(), 1);
    let area = &model.areas()[0];
    let node = &model.nodes()[0];
    assert_eq!(node.area_id(), Some(area.id()));
    assert_eq!(area.node_ids(), &[node.id()]);
}

#[test]
fn test_label_binds_to_nearer_node() {
    let model = import(&[
        node("O0", 0.0, 0.0, 10.0),
        node("O1", 5.0, 5.0, 10.0),
        label("O2", "Core", 1.0, 1.0),
    ]);

    assert_eq!(model.nodes()[0].name(), "Core");
    assert_eq!(model.nodes()[1].name(), "AP-02");
}

#[test]
fn test_label_falls_back_to_area() {
    let model = import(&[
        area("O0", 0.0, 0.0, 50.0),
        node("O1", 0.0, 0.0, 2.0),
        label("O2", "North campus", 30.0, 0.0),
    ]);

    assert_eq!(model.areas()[0].name(), "North campus");
    assert_eq!(model.nodes()[0].name(), "AP-01");
}

#[test]
fn test_embedded_shape_text_names_the_node() {
    let shape = node("O0", 0.0, 0.0, 2.0).replace(
        "</dia:object>",
        r##"<dia:attribute name="text"><dia:composite type="text">
    <dia:attribute name="string"><dia:string>#Uplink#</dia:string></dia:attribute>
  </dia:composite></dia:attribute>
</dia:object>"##,
    );

    let model = import(&[shape, label("O1", "Ignored", 0.0, 0.0)]);

    assert_eq!(model.nodes()[0].name(), "Uplink");
}

#[test]
fn test_handles_override_geometry() {
    let model = import(&[
        node("O0", 0.0, 0.0, 1.0),
        node("O1", 10.0, 0.0, 1.0),
        node("O2", 20.0, 0.0, 1.0),
        // The points sit on O0 and O1, the handles name O2 and O0.
        line("O3", (0.0, 0.0), (10.0, 0.0), &connections("O2", "O0")),
    ]);

    assert_eq!(model.connections().len(), 1);
    let connection = &model.connections()[0];
    assert_eq!(connection.from_id(), model.nodes()[2].id());
    assert_eq!(connection.to_id(), model.nodes()[0].id());
}

#[test]
fn test_connector_near_one_node_is_dropped() {
    let model = import(&[
        node("O0", 0.0, 0.0, 1.0),
        node("O1", 100.0, 0.0, 1.0),
        line("O2", (0.5, 0.0), (2.0, 0.0), ""),
    ]);

    assert!(model.connections().is_empty());
    assert!(model.connection_types().is_empty());
}

#[test]
fn test_same_color_and_width_share_one_type() {
    let style = r##"<dia:attribute name="line_color"><dia:color val="#112233"/></dia:attribute>
  <dia:attribute name="line_width"><dia:real val="0.2"/></dia:attribute>"##;
    let model = import(&[
        node("O0", 0.0, 0.0, 1.0),
        node("O1", 10.0, 0.0, 1.0),
        node("O2", 20.0, 0.0, 1.0),
        line("O3", (0.0, 0.0), (10.0, 0.0), style),
        line("O4", (10.0, 0.0), (20.0, 0.0), style),
    ]);

    assert_eq!(model.connection_types().len(), 1);
    let connection_type = &model.connection_types()[0];
    assert_eq!(connection_type.color().as_str(), "#112233");
    assert_eq!(connection_type.thickness(), 4);
    assert!(
        model
            .connections()
            .iter()
            .all(|connection| connection.type_id() == connection_type.id())
    );
}

#[test]
fn test_naming_without_labels() {
    let model = import(&[
        area("O0", 0.0, 0.0, 100.0),
        node("O1", 0.0, 0.0, 1.0),
        area("O2", 500.0, 0.0, 100.0),
        node("O3", 500.0, 0.0, 1.0),
    ]);

    let node_names: Vec<&str> = model.nodes().iter().map(|n| n.name()).collect();
    let area_names: Vec<&str> = model.areas().iter().map(|a| a.name()).collect();
    assert_eq!(node_names, vec!["AP-01", "AP-02"]);
    assert_eq!(area_names, vec!["Area-1", "Area-2"]);
}

#[test]
fn test_coord_scale_from_config() {
    let builder = ImportBuilder::new(AppConfig::default().with_coord_scale(10.0));
    let model = builder
        .import(&document(&[node("O0", 1.0, 2.0, 0.5)]))
        .expect("Failed to import");

    let center = model.nodes()[0].center();
    assert!((center.x() - 10.0).abs() < 1e-9);
    assert!((center.y() - 20.0).abs() < 1e-9);
}

#[test]
fn test_negative_coord_scale_mirrors_diagram() {
    let builder = ImportBuilder::new(AppConfig::default().with_coord_scale(-1.0));
    let model = builder
        .import(&document(&[
            area("O0", 0.0, 0.0, 10.0),
            node("O1", 3.0, 4.0, 1.0),
        ]))
        .expect("Failed to import");

    let node = &model.nodes()[0];
    assert!((node.center().x() + 3.0).abs() < 1e-9);
    assert!((node.center().y() + 4.0).abs() < 1e-9);
    assert_eq!(node.area_id(), Some(model.areas()[0].id()));
}

#[test]
fn test_zero_line_scale_clamps_thickness() {
    let style = r##"<dia:attribute name="line_width"><dia:real val="0.2"/></dia:attribute>"##;
    let builder = ImportBuilder::new(AppConfig::default().with_line_scale(0.0));
    let model = builder
        .import(&document(&[
            node("O0", 0.0, 0.0, 1.0),
            node("O1", 10.0, 0.0, 1.0),
            line("O2", (0.0, 0.0), (10.0, 0.0), style),
        ]))
        .expect("Failed to import");

    assert_eq!(model.connection_types()[0].thickness(), 1);
}

#[test]
fn test_colors_are_kept_as_written() {
    let plain = r##"<dia:attribute name="line_color"><dia:color val="#112233"/></dia:attribute>"##;
    let padded = r##"<dia:attribute name="line_color"><dia:color val=" #112233"/></dia:attribute>"##;
    let model = import(&[
        node("O0", 0.0, 0.0, 1.0),
        node("O1", 10.0, 0.0, 1.0),
        node("O2", 20.0, 0.0, 1.0),
        line("O3", (0.0, 0.0), (10.0, 0.0), plain),
        line("O4", (10.0, 0.0), (20.0, 0.0), padded),
    ]);

    let colors: Vec<&str> = model
        .connection_types()
        .iter()
        .map(|ty| ty.color().as_str())
        .collect();
    assert_eq!(colors, vec!["#112233", " #112233"]);
}

#[test]
fn test_render_json_document() {
    let builder = ImportBuilder::default();
    let model = builder
        .import(&document(&[
            area("O0", 0.0, 0.0, 10.0),
            node("O1", 0.0, 0.0, 2.0),
            node("O2", 20.0, 0.0, 2.0),
            line("O3", (0.0, 0.0), (20.0, 0.0), ""),
        ]))
        .expect("Failed to import");

    let json = builder.render_json(&model).expect("Failed to render");
    let value: Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(value["accessPoints"][0]["areaId"], "area-1");
    assert_eq!(value["accessPoints"][1]["areaId"], Value::Null);
    assert_eq!(value["areas"][0]["pointIds"][0], "ap-1");
    assert_eq!(value["areas"][0]["jitter"], 0.12);
    assert_eq!(value["connections"][0]["fromId"], "ap-1");
    assert_eq!(value["connections"][0]["toId"], "ap-2");
    assert_eq!(value["connectionTypes"][0]["color"], "#3f4a3a");
    assert_eq!(value["connectionTypes"][0]["thickness"], 2);
    assert_eq!(value["connectionTypes"][0]["type"], "metalic");
    assert_eq!(value["connectionTypes"][0]["lineStyle"], "solid");
}

#[test]
fn test_parse_error_keeps_source() {
    let source = "<dia:diagram";
    let err = ImportBuilder::default()
        .import(source)
        .expect_err("Should reject malformed XML");

    match err {
        CloudmapError::Parse { src, .. } => assert_eq!(src, source),
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_parse_bytes_rejects_compressed_input() {
    let err = ImportBuilder::default()
        .parse_bytes(&[0x1f, 0x8b, 0x08])
        .expect_err("Should reject gzip input");

    assert!(matches!(err, CloudmapError::Parse { .. }));
}

#[test]
fn test_builder_reusability() {
    let builder = ImportBuilder::default();

    let first = builder
        .import(&document(&[node("O0", 0.0, 0.0, 1.0)]))
        .expect("Failed to import first");
    let second = builder
        .import(&document(&[node("O0", 0.0, 0.0, 1.0), node("O1", 9.0, 0.0, 1.0)]))
        .expect("Failed to import second");

    assert_eq!(first.nodes().len(), 1);
    assert_eq!(second.nodes().len(), 2);
}
