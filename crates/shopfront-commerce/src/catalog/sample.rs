//! Built-in sample data: the product catalog, home-page sections and
//! carousel slides the storefront ships with.

use crate::catalog::{CategorySection, Product, SectionItem, Slide};
use crate::ids::ProductId;

struct Row {
    id: &'static str,
    name: &'static str,
    category: Option<&'static str>,
    rating: f32,
    rating_count: u32,
    discounted: &'static str,
    actual: &'static str,
    discount: &'static str,
    has_image: bool,
}

const CATALOG: &[Row] = &[
    Row { id: "B07JW9H4J1", name: "Wayona Nylon Braided USB to Lightning Fast Charging Cable", category: Some("Electronics|Computers & Accessories|Cables"), rating: 4.2, rating_count: 24269, discounted: "\u{20b9}399", actual: "\u{20b9}1,099", discount: "64%", has_image: true },
    Row { id: "B098NS6PVG", name: "Ambrane Unbreakable 60W Type C Cable", category: Some("Electronics|Computers & Accessories|Cables"), rating: 4.0, rating_count: 43994, discounted: "\u{20b9}199", actual: "\u{20b9}349", discount: "43%", has_image: true },
    Row { id: "B09W5XR9RT", name: "boAt Rockerz 255 Pro+ Bluetooth Neckband", category: Some("Electronics|Headphones & Earbuds"), rating: 4.1, rating_count: 113000, discounted: "\u{20b9}1,499", actual: "\u{20b9}4,490", discount: "67%", has_image: true },
    Row { id: "B0B3RRWSF6", name: "Redmi 10A (Charcoal Black, 4GB RAM, 64GB Storage)", category: Some("Electronics|Mobiles & Accessories|Smartphones"), rating: 4.1, rating_count: 178817, discounted: "\u{20b9}8,499", actual: "\u{20b9}10,999", discount: "23%", has_image: true },
    Row { id: "B09XJ1LM7R", name: "Samsung Galaxy M33 5G (Emerald Brown, 6GB, 128GB Storage)", category: Some("Electronics|Mobiles & Accessories|Smartphones"), rating: 4.1, rating_count: 45238, discounted: "\u{20b9}14,999", actual: "\u{20b9}24,999", discount: "40%", has_image: true },
    Row { id: "B0BMXMLSMM", name: "Prestige Iris 750 Watt Mixer Grinder with 3 Jars", category: Some("Home & Kitchen|Kitchen Appliances|Mixer Grinders"), rating: 3.9, rating_count: 27733, discounted: "\u{20b9}3,199", actual: "\u{20b9}5,445", discount: "41%", has_image: true },
    Row { id: "B08L12N5H1", name: "Philips HD9200/90 Air Fryer, 4.1 Litre", category: Some("Home & Kitchen|Kitchen Appliances|Air Fryers"), rating: 4.3, rating_count: 61677, discounted: "\u{20b9}5,000", actual: "\u{20b9}9,995", discount: "50%", has_image: true },
    Row { id: "B07PQ5Y5G5", name: "Milton Thermosteel Flip Lid Flask, 1000 ml", category: Some("Home & Kitchen|Kitchen & Dining|Flasks"), rating: 4.3, rating_count: 14000, discounted: "\u{20b9}899", actual: "\u{20b9}1,260", discount: "29%", has_image: true },
    Row { id: "B0B5LVS732", name: "Allen Solly Men's Regular Fit Polo", category: Some("Fashion|Men|T-Shirts & Polos"), rating: 3.8, rating_count: 5612, discounted: "\u{20b9}649", actual: "\u{20b9}1,299", discount: "50%", has_image: true },
    Row { id: "B09QGZM8QB", name: "Fossil Gen 6 Display Smartwatch", category: Some("Fashion|Watches|Smartwatches"), rating: 4.4, rating_count: 1320, discounted: "\u{20b9}18,995", actual: "\u{20b9}24,995", discount: "24%", has_image: true },
    Row { id: "B00H8SJP4W", name: "Atomic Habits (Paperback)", category: Some("Books|Self Help"), rating: 4.7, rating_count: 98312, discounted: "\u{20b9}416", actual: "\u{20b9}799", discount: "48%", has_image: true },
    Row { id: "B07RJ2K6XN", name: "The Psychology of Money (Paperback)", category: Some("Books|Business & Economics"), rating: 4.6, rating_count: 64211, discounted: "\u{20b9}280", actual: "\u{20b9}399", discount: "30%", has_image: true },
    Row { id: "B08CFCK6CW", name: "Lakme 9 to 5 Primer + Matte Lipstick", category: Some("Beauty|Makeup|Lips"), rating: 4.1, rating_count: 8920, discounted: "\u{20b9}399", actual: "\u{20b9}675", discount: "41%", has_image: true },
    Row { id: "B0BD92GDQH", name: "Philips BT1232 Beard Trimmer", category: Some("Beauty|Men's Grooming|Trimmers"), rating: 4.2, rating_count: 30211, discounted: "\u{20b9}1,049", actual: "\u{20b9}1,395", discount: "25%", has_image: true },
    Row { id: "B07GXHC691", name: "Funskool Monopoly Classic Board Game", category: Some("Toys & Games|Board Games"), rating: 4.4, rating_count: 6012, discounted: "\u{20b9}999", actual: "\u{20b9}1,499", discount: "33%", has_image: true },
    Row { id: "B09NVPSCQT", name: "LEGO Classic Large Creative Brick Box", category: Some("Toys & Games|Building Sets"), rating: 4.8, rating_count: 3541, discounted: "\u{20b9}10,000", actual: "\u{20b9}12,999", discount: "23%", has_image: true },
    Row { id: "B0B1YZX72F", name: "Boldfit Yoga Mat for Men and Women", category: Some("Sports & Fitness|Yoga"), rating: 4.0, rating_count: 18770, discounted: "\u{20b9}499", actual: "\u{20b9}1,499", discount: "67%", has_image: true },
    Row { id: "B0B4F2TTTS", name: "Cosco Dribble Basketball, Size 7", category: Some("Sports & Fitness|Basketball"), rating: 3.2, rating_count: 2210, discounted: "\u{20b9}1,000", actual: "\u{20b9}1,250", discount: "20%", has_image: true },
    Row { id: "B07Q4NJQC5", name: "Bosch Handheld Car Vacuum Cleaner", category: Some("Automotive|Car Accessories|Cleaning"), rating: 3.6, rating_count: 1405, discounted: "\u{20b9}2,799", actual: "\u{20b9}3,999", discount: "30%", has_image: true },
    Row { id: "B0972BQ2RS", name: "Universal Mobile Holder Stand", category: None, rating: 2.9, rating_count: 87, discounted: "\u{20b9}149", actual: "\u{20b9}999", discount: "85%", has_image: false },
    Row { id: "B0BHZCNC4P", name: "Sony Bravia 139 cm (55 inches) 4K Ultra HD Smart LED Google TV", category: Some("Electronics|Televisions"), rating: 4.5, rating_count: 7012, discounted: "\u{20b9}61,990", actual: "\u{20b9}1,04,900", discount: "41%", has_image: true },
    Row { id: "B09MT84WV5", name: "Havells Ambrose 1200mm Ceiling Fan", category: Some("Home & Kitchen|Heating, Cooling & Air Quality|Fans"), rating: 4.0, rating_count: 9320, discounted: "\u{20b9}2,249", actual: "\u{20b9}3,720", discount: "40%", has_image: true },
];

/// The product catalog.
pub fn products() -> Vec<Product> {
    CATALOG
        .iter()
        .map(|row| Product {
            id: ProductId::new(row.id),
            name: row.name.to_string(),
            image: row
                .has_image
                .then(|| format!("/assets/products/{}.jpg", row.id)),
            category: row.category.map(str::to_string),
            rating: row.rating,
            rating_count: row.rating_count,
            discounted_price: row.discounted.to_string(),
            actual_price: Some(row.actual.to_string()),
            discount_percentage: row.discount.to_string(),
        })
        .collect()
}

/// Home-page category tiles.
pub fn sections() -> Vec<CategorySection> {
    fn section(title: &str, search_term: &str, items: &[(&str, &str)]) -> CategorySection {
        CategorySection {
            title: title.to_string(),
            search_term: search_term.to_string(),
            items: items
                .iter()
                .map(|(name, slug)| SectionItem {
                    name: name.to_string(),
                    image: format!("/assets/sections/{}.jpg", slug),
                })
                .collect(),
        }
    }

    vec![
        section(
            "Gaming accessories",
            "Electronics",
            &[
                ("Headsets", "gaming-headsets"),
                ("Keyboards", "gaming-keyboards"),
                ("Computer mice", "gaming-mice"),
                ("Chairs", "gaming-chairs"),
            ],
        ),
        section(
            "Shop deals in Fashion",
            "Fashion",
            &[
                ("Jeans under \u{20b9}999", "fashion-jeans"),
                ("Tops under \u{20b9}999", "fashion-tops"),
                ("Dresses under \u{20b9}999", "fashion-dresses"),
                ("Shoes under \u{20b9}999", "fashion-shoes"),
                ("Watches under \u{20b9}999", "fashion-watches"),
            ],
        ),
        section(
            "Revamp your home in style",
            "Home & Kitchen",
            &[
                ("Cushion covers, bedsheets & more", "home-cushions"),
                ("Figurines, vases & more", "home-figurines"),
                ("Home storage", "home-storage"),
                ("Lighting solutions", "home-lighting"),
            ],
        ),
        section(
            "Appliances for your home",
            "Kitchen Appliances",
            &[
                ("Air conditioners", "appliances-ac"),
                ("Refrigerators", "appliances-fridge"),
                ("Microwaves", "appliances-microwave"),
                ("Washing machines", "appliances-washer"),
            ],
        ),
    ]
}

/// Carousel slides, in display order.
pub fn slides() -> Vec<Slide> {
    vec![
        Slide::new("/assets/hero/festival-sale.jpg", "Great Indian Festival: deals on everything"),
        Slide::new("/assets/hero/electronics.jpg", "Up to 60% off on electronics"),
        Slide::new("/assets/hero/home-kitchen.jpg", "Refresh your home and kitchen"),
        Slide::new("/assets/hero/books.jpg", "Bestselling books from \u{20b9}99"),
        Slide::new("/assets/hero/fashion.jpg", "New season fashion arrivals"),
    ]
}
