// ============================================================================
// PRODUCTS - public catalog page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{el, ElementBuilder};
use crate::views::home::{public_footer, public_nav};

/// The five products, shared with the homepage showcase:
/// (name, tagline, description)
pub const CATALOG: [(&str, &str, &str); 5] = [
    (
        "Imperial Crown",
        "The Original. The Icon.",
        "Our flagship blend and the one that started it all. Deep, layered \
         and unmistakably premium, Imperial Crown remains the benchmark \
         every other bottle in our cellar is measured against.",
    ),
    (
        "Cranberry",
        "Tart. Crisp. Timeless.",
        "A bright ruby classic with a clean, tart finish. Pressed from \
         hand-selected cranberries and balanced for food, celebration or \
         a quiet evening pour.",
    ),
    (
        "Orange",
        "Sunshine, Bottled.",
        "Sun-kissed perfection in every pour. Vibrant, energizing, and \
         refreshingly authentic. Crafted from the finest oranges, our \
         Orange blend captures the essence of freshness with every sip.",
    ),
    (
        "Mango",
        "Tropical Indulgence.",
        "An exotic escape captured in a bottle. Luscious, velvety, and \
         utterly indulgent. Our Mango blend transports you to tropical \
         paradise with its rich, authentic flavor and smooth finish.",
    ),
    (
        "Black Stallion",
        "Dare to Stand Apart.",
        "Bold, mysterious, and powerfully distinctive. For those who dare \
         to stand apart. Our most enigmatic creation, Black Stallion is a \
         testament to innovation and audacity in beverage craftsmanship.",
    ),
];

pub fn render_products() -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("hero")
        .child(el("h1", "", "Our Products")?)?
        .child(el(
            "p",
            "",
            "Five expressions of one obsession with quality. Distributed \
             exclusively through our partner network.",
        )?)?
        .build();

    let grid = ElementBuilder::new("div")?.class("product-grid").build();
    for (name, tagline, description) in CATALOG {
        let card = ElementBuilder::new("div")?
            .class("product-card")
            .child(el("h3", "", name)?)?
            .child(el("p", "tagline", tagline)?)?
            .child(el("p", "description", description)?)?
            .build();
        grid.append_child(&card)?;
    }

    ElementBuilder::new("div")?
        .child(public_nav()?)?
        .child(header)?
        .child(grid)?
        .child(public_footer()?)
        .map(ElementBuilder::build)
}
