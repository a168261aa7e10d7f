use std::collections::BTreeSet;

use gamestop_extract::{
    extract_game, extract_game_bytes, extract_game_bytes_with_options, extract_game_with_options,
    Cause, Error, FindMore, Options, Pegi, PriceQuote,
};
use url::Url;

const GAME_PAGE: &str = include_str!("fixtures/game_page.html");

#[test]
fn product_page_main_info() {
    let game = extract_game(154_167, GAME_PAGE).expect("fixture is well formed");

    assert_eq!(game.summary.id, 154_167);
    assert_eq!(game.summary.title, "The Last of Us Parte II");
    assert_eq!(game.summary.platform, "PS4");
    assert_eq!(game.summary.publisher, "Sony Computer Entertainment");
    assert_eq!(
        game.summary.cover.as_deref(),
        Some("https://static-it.gamestop.it/images/products/154167/3max.jpg")
    );
}

#[test]
fn product_page_optional_info() {
    let game = extract_game(154_167, GAME_PAGE).expect("fixture is well formed");

    assert_eq!(game.release_date.as_deref(), Some("19/06/2020"));
    assert_eq!(game.website.as_deref(), Some("https://www.playstation.com/tlou2"));
    assert_eq!(game.players.as_deref(), Some("1"));
    let genres: BTreeSet<String> = ["Azione", "Avventura"].map(String::from).into();
    assert_eq!(game.genres, genres);
    assert!(game.valid_for_promo);
}

#[test]
fn product_page_prices_per_channel() {
    let game = extract_game(154_167, GAME_PAGE).expect("fixture is well formed");

    assert_eq!(
        game.summary.new_price,
        PriceQuote {
            current_price: 29.98,
            old_prices: vec![39.98, 74.98],
            available: true,
        }
    );
    assert_eq!(
        game.summary.used_price,
        PriceQuote {
            current_price: 19.98,
            old_prices: vec![],
            available: false,
        }
    );
    assert_eq!(game.summary.preorder_price, PriceQuote::default());
    assert_eq!(
        game.summary.digital_price,
        PriceQuote {
            current_price: 24.99,
            old_prices: vec![69.99],
            available: true,
        }
    );
}

#[test]
fn product_page_ratings_gallery_description() {
    let game = extract_game(154_167, GAME_PAGE).expect("fixture is well formed");

    let pegi: BTreeSet<Pegi> = [Pegi::Pegi18, Pegi::Violence, Pegi::BadLanguage].into();
    assert_eq!(game.pegi, pegi);

    assert_eq!(
        game.gallery,
        vec![
            "https://static-it.gamestop.it/images/products/154167/7scrmax2.jpg",
            "https://static-it.gamestop.it/images/products/154167/9scrmax3.jpg",
        ]
    );

    let description = game.description.expect("description block is present");
    assert!(description.starts_with("<div id=\"prodDesc\">"));
    assert!(description.contains("Ellie e Joel"));
    assert!(description.contains("<b>Caratteristiche</b>"));
    assert!(!description.contains("<img"));
    assert!(!description.contains("Descrizione"));
    assert!(!description.contains("Torna su"));
}

#[test]
fn product_page_promos() {
    let game = extract_game(154_167, GAME_PAGE).expect("fixture is well formed");

    assert_eq!(game.promos.len(), 2);
    assert_eq!(game.promos[0].title, "Bonus prenotazione");
    assert_eq!(game.promos[0].text, "Tema dinamico esclusivo");
    assert_eq!(game.promos[0].find_more, None);

    assert_eq!(game.promos[1].title, "Supervalutazione usato");
    assert_eq!(
        game.promos[1].find_more,
        Some(FindMore {
            label: "Scopri di più".into(),
            url: "https://www.gamestop.it/Promo/Supervalutazione".into(),
        })
    );
}

#[test]
fn find_more_link_resolves_against_configured_base() {
    let options = Options {
        base_url: Url::parse("http://localhost:8080").expect("valid url"),
    };
    let game = extract_game_with_options(1, GAME_PAGE, &options).expect("fixture is well formed");

    let find_more = game.promos[1].find_more.clone().expect("second promo links out");
    assert_eq!(find_more.url, "http://localhost:8080/Promo/Supervalutazione");
}

#[test]
fn missing_details_block_is_tolerated() {
    let start = GAME_PAGE.find("<div class=\"addedDetInfo\">").expect("fixture has details");
    let end = start + GAME_PAGE[start..].find("</div>").expect("details block closes") + "</div>".len();
    let html = format!("{}{}", &GAME_PAGE[..start], &GAME_PAGE[end..]);

    let game = extract_game(154_167, &html).expect("details block is optional");

    assert_eq!(game.release_date, None);
    assert_eq!(game.website, None);
    assert!(game.genres.is_empty());
    assert!(!game.valid_for_promo);
    assert_eq!(game.summary.title, "The Last of Us Parte II");
    assert_eq!(game.summary.new_price.current_price, 29.98);
}

#[test]
fn unrecognized_variant_label_fails_whole_page() {
    let html = GAME_PAGE.replace(
        r#"<span class="variantName">Usato</span>"#,
        r#"<span class="variantName">Noleggio</span>"#,
    );

    let err = extract_game(154_167, &html).unwrap_err();
    assert_eq!(err, Error::MalformedDocument(Cause::UnknownVariant("Noleggio".into())));
}

#[test]
fn variant_row_without_name_fails_whole_page() {
    let html = GAME_PAGE.replace(r#"<span class="variantName">Usato</span>"#, "");

    let err = extract_game(154_167, &html).unwrap_err();
    assert_eq!(err, Error::MalformedDocument(Cause::MissingElement(".variantName")));
}

#[test]
fn unparsable_price_fails_whole_page() {
    let html = GAME_PAGE.replace(
        r#"<p class="prodPriceCont">19,98€</p>"#,
        r#"<p class="prodPriceCont">Non disponibile</p>"#,
    );

    assert!(matches!(
        extract_game(154_167, &html),
        Err(Error::MalformedDocument(Cause::InvalidPrice(_)))
    ));
}

#[test]
fn title_block_without_paragraph_fails() {
    let html = r#"<div class="prodTitle"><h1>Senza piattaforma</h1></div>"#;

    let err = extract_game(5, html).unwrap_err();
    assert_eq!(err, Error::MalformedDocument(Cause::MissingElement("p")));
}

#[test]
fn page_without_any_product_section_fails() {
    let html = "<html><body><h1>Pagina non trovata</h1></body></html>";

    let err = extract_game(5, html).unwrap_err();
    assert_eq!(err, Error::MalformedDocument(Cause::UnrecognizedPage));
}

#[test]
fn details_block_marked_not_valid_for_promo() {
    let html = GAME_PAGE.replace(
        "Prodotto VALIDO per le promozioni",
        "Prodotto NON VALIDO per le promozioni",
    );

    let game = extract_game(154_167, &html).expect("page is well formed");

    assert!(!game.valid_for_promo);
    assert_eq!(game.release_date.as_deref(), Some("19/06/2020"));
}

#[test]
fn description_inside_table_cell() {
    let html = r#"<div class="prodTitle"><h1>Vecchio layout</h1><p><span>PS3</span></p></div>
        <table><tr><td id="prodDesc">
          <div class="prodSecHead">Descrizione</div>
          <p>Testo vero</p>
        </td></tr></table>"#;

    let game = extract_game(8, html).expect("page is well formed");
    let description = game.description.expect("description is present");

    assert!(description.starts_with("<td"), "{description}");
    assert!(description.contains("<p>Testo vero</p>"));
    assert!(!description.contains("prodSecHead"));
}

#[test]
fn sparse_page_keeps_defaults() {
    let html = r#"<div class="ageBlock"><span class="pegi3"></span></div>"#;
    let game = extract_game(9, html).expect("one section is enough");

    assert_eq!(game.summary.title, "");
    assert_eq!(game.summary.cover, None);
    assert!(game.gallery.is_empty());
    assert!(game.promos.is_empty());
    assert_eq!(game.description, None);
    assert_eq!(game.pegi, BTreeSet::from([Pegi::Pegi3]));
}

#[test]
fn product_page_from_windows_1252_bytes() {
    let html = b"<meta charset=\"windows-1252\">\
        <div class=\"prodTitle\"><h1>Caff\xE8 Sim</h1><p><span>PC</span></p></div>\
        <div class=\"buySection\"><div class=\"singleVariantDetails\"><input type=\"radio\" data-int=\"1\">\
        <div class=\"singleVariantText\"><span class=\"variantName\">Nuovo</span>\
        <p class=\"prodPriceCont\">1.249,99 \x80</p></div></div></div>";

    let game = extract_game_bytes(3, html).expect("valid page");

    assert_eq!(game.summary.title, "Caffè Sim");
    assert_eq!(game.summary.new_price.current_price, 1249.99);
    assert_eq!(extract_game_bytes_with_options(3, html, &Options::default()), Ok(game));
}
