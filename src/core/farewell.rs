//! Farewell texts
//!
//! One taunt per language, shown right after the wrong guess that cost it.

const FAREWELLS: &[(&str, &str)] = &[
    ("HTML", "Farewell, HTML. The web will be a little less structured."),
    ("CSS", "Adios, CSS. Everything is Times New Roman now."),
    ("JavaScript", "R.I.P., JavaScript. undefined is not a function anymore."),
    ("React", "We'll miss you, React. Nobody re-renders like you did."),
    ("TypeScript", "Oh no, not TypeScript! Back to any everywhere."),
    ("Node.js", "Gone but not forgotten, Node.js. node_modules weighs nothing now."),
    ("Python", "Python has left the building. Mind the indentation on your way out."),
    ("Ruby", "Ruby has been swept off the rails."),
    ("Assembly", "Assembly has fallen. There is nothing lower to go."),
];

/// Taunt for the language that was just lost
///
/// Unknown names get a generic line.
#[must_use]
pub fn farewell_text(language: &str) -> String {
    FAREWELLS
        .iter()
        .find(|(name, _)| *name == language)
        .map_or_else(
            || format!("Farewell, {language}. It was nice knowing you."),
            |(_, text)| (*text).to_string(),
        )
}
