use entigen_core::{Column, Platform, Table};
use entigen_render::{EntityClass, RenderOptions, render_entity};

fn column(
    ordinal_position: i32,
    name: &str,
    data_type: &str,
    length: Option<u32>,
    is_nullable: bool,
    is_autoincrement: bool,
) -> Column {
    Column {
        ordinal_position,
        name: name.to_string(),
        data_type: data_type.to_string(),
        length,
        is_nullable,
        is_autoincrement,
        comment: None,
    }
}

#[test]
fn renders_complete_entity_source() {
    let mut location = column(5, "location", "point", None, true, false);
    location.comment = Some("GPS position".to_string());
    let table = Table {
        name: "product".to_string(),
        columns: vec![
            column(1, "id", "int", None, false, true),
            column(2, "name", "varchar(120)", Some(120), false, false),
            column(3, "price", "decimal(10,2)", None, true, false),
            column(4, "created_at", "datetime", None, false, false),
            location,
        ],
    };

    let class = EntityClass::from_table(&Platform::MySql, "", &table);
    let source = render_entity(&class, &RenderOptions::default());

    let expected = "<?php

namespace App\\Entity;

use Doctrine\\ORM\\Mapping as ORM;

#[ORM\\Entity]
#[ORM\\Table(name: \"product\")]
class Product
{
\t#[ORM\\Id]
\t#[ORM\\GeneratedValue(strategy: \"AUTO\")]
\t#[ORM\\Column(name: \"id\", type: \"int\", nullable: false)]
\tprivate ?int $id = null;

\t#[ORM\\Column(name: \"name\", type: \"string\", length: 120)]
\tprivate ?string $name = null;

\t#[ORM\\Column(name: \"price\", type: \"float\", nullable: true)]
\tprivate ?float $price = null;

\t#[ORM\\Column(name: \"created_at\", type: \"\\DateTimeInterface\", nullable: false)]
\tprivate ?\\DateTimeInterface $created_at = null;

\t/** GPS position */
\t#[ORM\\Column(name: \"location\", type: \"mixed\")]
\tprivate mixed $location = null;

\tpublic function getId(): ?int
\t{
\t\treturn $this->id;
\t}

\tpublic function setId(?int $id): void
\t{
\t\t$this->id = $id;
\t}

\tpublic function getName(): ?string
\t{
\t\treturn $this->name;
\t}

\tpublic function setName(?string $name): void
\t{
\t\t$this->name = $name;
\t}

\tpublic function getPrice(): ?float
\t{
\t\treturn $this->price;
\t}

\tpublic function setPrice(?float $price): void
\t{
\t\t$this->price = $price;
\t}

\tpublic function getCreated_at(): ?\\DateTimeInterface
\t{
\t\treturn $this->created_at;
\t}

\tpublic function setCreated_at(?\\DateTimeInterface $created_at): void
\t{
\t\t$this->created_at = $created_at;
\t}

\tpublic function getLocation(): mixed
\t{
\t\treturn $this->location;
\t}

\tpublic function setLocation(mixed $location): void
\t{
\t\t$this->location = $location;
\t}

}
";
    assert_eq!(source, expected);
}

#[test]
fn prefixed_class_keeps_table_mapping_and_namespace() {
    let table = Table {
        name: "orders".to_string(),
        columns: vec![column(1, "Id", "uniqueidentifier", None, false, false)],
    };
    let class = EntityClass::from_table(&Platform::SqlServer, "Legacy", &table);
    let opts = RenderOptions {
        namespace: "Acme\\Legacy\\Entity".to_string(),
    };
    let source = render_entity(&class, &opts);

    assert!(source.contains("namespace Acme\\Legacy\\Entity;\n"));
    assert!(source.contains("#[ORM\\Table(name: \"orders\")]\nclass LegacyOrders\n{\n"));
    assert!(!source.contains("#[ORM\\Id]"), "non-autoincrement id is not an identifier");
    assert!(source.contains("\tprivate ?string $Id = null;\n"));
}
