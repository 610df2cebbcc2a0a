//! Built-in product category tree, used when no tree file is supplied.

use super::node::TreeNode;

fn leaf(id: u64, label: &str, value: &str) -> TreeNode {
    TreeNode::new(id, label, value)
}

fn branch(id: u64, label: &str, value: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::new(id, label, value).with_children(children)
}

/// Two to three levels of shop categories.
pub fn sample_tree() -> Vec<TreeNode> {
    vec![
        branch(
            1,
            "Electronics",
            "electronics",
            vec![
                branch(
                    11,
                    "Computers",
                    "computers",
                    vec![
                        leaf(111, "Gaming Laptop", "gaming-laptop"),
                        leaf(112, "Office Laptop", "office-laptop"),
                        leaf(113, "Desktop PC", "desktop-pc"),
                        leaf(114, "All-in-One PC", "all-in-one-pc"),
                    ],
                ),
                branch(
                    12,
                    "Smartphones",
                    "smartphones",
                    vec![
                        leaf(121, "iPhone", "iphone"),
                        leaf(122, "Samsung Galaxy", "samsung"),
                        leaf(123, "Xiaomi", "xiaomi"),
                        leaf(124, "OPPO", "oppo"),
                    ],
                ),
                branch(
                    13,
                    "Home Appliances",
                    "home-appliances",
                    vec![
                        leaf(131, "Refrigerator", "refrigerator"),
                        leaf(132, "Washing Machine", "washing-machine"),
                        leaf(133, "Air Conditioner", "air-conditioner"),
                    ],
                ),
                leaf(14, "Accessories", "accessories"),
            ],
        ),
        branch(
            2,
            "Fashion",
            "fashion",
            vec![
                branch(
                    21,
                    "Men's Clothing",
                    "mens-clothing",
                    vec![
                        leaf(211, "Shirts", "shirts"),
                        leaf(212, "T-Shirts", "t-shirts"),
                        leaf(213, "Jeans", "jeans"),
                        leaf(214, "Shorts", "shorts"),
                    ],
                ),
                branch(
                    22,
                    "Women's Clothing",
                    "womens-clothing",
                    vec![
                        leaf(221, "Dresses", "dresses"),
                        leaf(222, "Long Sleeve Tops", "long-sleeve-tops"),
                        leaf(223, "Skirts", "skirts"),
                    ],
                ),
                leaf(23, "Shoes", "shoes"),
                leaf(24, "Bags", "bags"),
            ],
        ),
        branch(
            3,
            "Home & Garden",
            "home-garden",
            vec![
                branch(
                    31,
                    "Furniture",
                    "furniture",
                    vec![
                        leaf(311, "Sofas", "sofas"),
                        leaf(312, "Desks", "desk"),
                        leaf(313, "Chairs", "chairs"),
                        leaf(314, "Wardrobes", "wardrobe"),
                    ],
                ),
                branch(
                    32,
                    "Gardening",
                    "gardening",
                    vec![
                        leaf(321, "Garden Tools", "garden-tools"),
                        leaf(322, "Plant Pots", "plant-pots"),
                        leaf(323, "Fertilizer & Soil", "fertilizer-soil"),
                    ],
                ),
                leaf(33, "Kitchen Equipment", "kitchen-equipment"),
            ],
        ),
        branch(
            4,
            "Books & Education",
            "books-education",
            vec![
                leaf(41, "Textbooks", "textbooks"),
                leaf(42, "Novels", "novels"),
                leaf(43, "Comics", "comics"),
                leaf(44, "Children's Books", "children-books"),
            ],
        ),
        leaf(5, "Toys & Hobbies", "toys-hobbies"),
        leaf(6, "Food & Beverages", "food-beverages"),
    ]
}
