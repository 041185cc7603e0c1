use super::*;
use pretty_assertions::assert_eq;

#[test]
fn hex_is_lowercase_and_padded() {
    assert_eq!(Rgb(0x0a, 0xbc, 0x00).hex(), "#0abc00");
}

#[test]
fn preference_picks_variant() {
    assert_eq!(Theme::for_preference(true).name(), "base16-dark");
    assert!(Theme::for_preference(true).is_dark());
    assert_eq!(Theme::for_preference(false).name(), "base16-light");
    assert_eq!(Theme::default(), Theme::base16_light());
}

#[test]
fn from_name_is_case_insensitive() {
    assert_eq!(Theme::from_name("Base16-Dark"), Ok(Theme::base16_dark()));
    assert_eq!(
        Theme::from_name("solarized"),
        Err(HighlightError::UnknownTheme {
            name: "solarized".to_owned()
        })
    );
}

#[test]
fn plain_is_unstyled_everything_else_styled() {
    for theme in [Theme::base16_light(), Theme::base16_dark()] {
        for tag in Tag::ALL {
            let style = theme.style_for(tag);
            assert_eq!(
                style.is_plain(),
                tag == Tag::Plain,
                "{tag:?} in {}",
                theme.name()
            );
        }
    }
}

#[test]
fn brackets_follow_variant_foreground() {
    let light = Theme::base16_light();
    let dark = Theme::base16_dark();
    assert_eq!(light.style_for(Tag::Bracket).fg, Some(light.foreground()));
    assert_eq!(dark.style_for(Tag::Bracket).fg, Some(dark.foreground()));
    assert_eq!(light.style_for(Tag::Keyword), dark.style_for(Tag::Keyword));
}

#[test]
fn css_classes_prefix_tag_names() {
    for tag in Tag::ALL {
        let expected = tag.style_name().map(|name| format!("cm-{name}"));
        assert_eq!(Theme::css_class(tag).map(str::to_owned), expected);
    }
}

#[test]
fn stylesheet_is_scoped_to_theme() {
    let css = Theme::base16_dark().stylesheet();
    assert!(css.starts_with(
        ".cm-s-base16-dark { background: #151515; color: #e0e0e0; }\n"
    ));
    let keyword = ".cm-s-base16-dark span.cm-keyword { color: #ac4142; }\n";
    assert!(css.contains(keyword));
    assert!(css.contains(
        ".cm-s-base16-dark span.cm-bracket { color: #e0e0e0; font-weight: bold; }\n"
    ));
    assert!(!css.contains("plain"));
}
