//! Template packs compiled into the library

use super::source::EmbeddedFile;

macro_rules! pack_file {
    ($pack:literal, $path:literal) => {
        EmbeddedFile {
            path: $path,
            contents: include_str!(concat!("../../../../templates/", $pack, "/", $path)),
        }
    };
}

/// The Pelias Node.js module pack (`templates/pelias`)
pub const PELIAS: &[EmbeddedFile] = &[
    pack_file!("pelias", "template.yaml"),
    pack_file!("pelias", "README.md"),
    pack_file!("pelias", "gitignore"),
    pack_file!("pelias", ".jshintrc"),
    pack_file!("pelias", ".jshintignore"),
    pack_file!("pelias", ".travis.yml"),
    pack_file!("pelias", "test/test.js"),
];
