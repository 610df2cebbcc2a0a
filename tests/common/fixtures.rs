//! Reusable tree fixtures.

pub const TREE_JSON: &str = r#"[
  {
    "id": 1,
    "label": "Electronics",
    "value": "electronics",
    "children": [
      {
        "id": 11,
        "label": "Computers",
        "value": "computers",
        "children": [
          { "id": 111, "label": "Gaming Laptop", "value": "gaming-laptop" },
          { "id": 113, "label": "Desktop PC", "value": "desktop-pc" }
        ]
      },
      { "id": 14, "label": "Computer Mice", "value": "mice" }
    ]
  },
  { "id": 2, "label": "Fashion", "value": "fashion" }
]
"#;

pub const TREE_TOML: &str = r#"
[[nodes]]
id = 1
label = "Garden"
value = "garden"

[[nodes.children]]
id = 11
label = "Plant Pots"
value = "plant-pots"

[[nodes.children]]
id = 12
label = "Garden Tools"
value = "garden-tools"

[[nodes]]
id = 2
label = "Books"
value = "books"
"#;

pub const TREE_WITH_DUPLICATES: &str = r#"[
  { "id": 1, "label": "Shoes", "value": "shoes" },
  { "id": 1, "label": "Boots", "value": "shoes" }
]
"#;
