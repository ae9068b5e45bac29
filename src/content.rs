//! Static page content.

use crate::gallery::state::ImageDescriptor;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Start"),
    ("#about", "Über uns"),
    ("#menu", "Karte"),
    ("#gallery", "Galerie"),
    ("#info", "Infos"),
    ("#contact", "Kontakt"),
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { icon: "🎵", title: "Live-Musik", text: "Jeden Freitag und Samstag Jazz, Folk und Singer-Songwriter auf unserer kleinen Bühne." },
    Feature { icon: "☕", title: "Hausgeröstet", text: "Unser Kaffee wird in Kreuzberg geröstet und frisch für jede Tasse gemahlen." },
    Feature { icon: "🍰", title: "Selbst gebacken", text: "Kuchen und Torten aus der eigenen Backstube, täglich frisch." },
    Feature { icon: "🎸", title: "Offene Bühne", text: "Mittwochs gehört die Bühne euch. Instrument mitbringen und loslegen." },
];

pub struct MenuCategory {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const MENU: &[MenuCategory] = &[
    MenuCategory {
        title: "Kaffee",
        items: &[("Espresso", "2,40 €"), ("Cappuccino", "3,40 €"), ("Flat White", "3,80 €"), ("Filterkaffee", "2,90 €")],
    },
    MenuCategory {
        title: "Kuchen",
        items: &[("Käsekuchen", "3,90 €"), ("Apfelstrudel", "4,20 €"), ("Schokoladentorte", "4,50 €")],
    },
    MenuCategory {
        title: "Kleinigkeiten",
        items: &[("Brezel mit Butter", "2,80 €"), ("Quiche des Tages", "6,50 €"), ("Suppe mit Brot", "5,90 €")],
    },
];

pub struct InfoCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const INFO_CARDS: &[InfoCard] = &[
    InfoCard { title: "Öffnungszeiten", lines: &["Mo–Do 9–22 Uhr", "Fr–Sa 9–24 Uhr", "So 10–20 Uhr"] },
    InfoCard { title: "Adresse", lines: &["Oranienstraße 42", "10999 Berlin"] },
    InfoCard { title: "Anfahrt", lines: &["U1 / U8 Kottbusser Tor", "Bus M29 Oranienplatz"] },
];

pub const CONTACT_ITEMS: &[(&str, &str)] = &[
    ("📞", "030 1234567"),
    ("✉️", "hallo@musik-cafe.berlin"),
    ("📍", "Oranienstraße 42, 10999 Berlin"),
];

pub fn gallery_images() -> Vec<ImageDescriptor> {
    [
        ("buehne.jpg", "Die Bühne während eines Jazzabends"),
        ("theke.jpg", "Theke mit Siebträgermaschine"),
        ("kuchen.jpg", "Kuchenauswahl in der Vitrine"),
        ("garten.jpg", "Sitzplätze im Hinterhofgarten"),
        ("konzert.jpg", "Publikum bei einem Konzert"),
        ("latte-art.jpg", "Cappuccino mit Latte Art"),
        ("offene-buehne.jpg", "Gitarrist bei der offenen Bühne"),
        ("abends.jpg", "Das Café am Abend von außen"),
    ]
    .into_iter()
    .map(|(file, alt)| ImageDescriptor::new(format!("/assets/gallery/{}", file), alt))
    .collect()
}
