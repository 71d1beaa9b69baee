//! CMake registration text for a generated test.
//!
//! Printed after the test source has been written so it can be pasted into the test suite's `CMakeLists.txt`:
//!
//! ```text
//!     add_executable(sebacic_exe src/tests/sebacic.cpp)
//!     target_link_libraries(sebacic_exe PRIVATE LEMNG
//!                                       PRIVATE ECHMETShared
//!                                       PRIVATE SysComp)
//!     add_test(sebacic sebacic_exe)
//! ```

use std::path::Path;

const INDENT: &str = "    ";

/// Test tag for an output path: the file name without its last extension.
pub fn test_tag(output: &Path) -> String {
    output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Registration lines for `output`, ending with an empty line.
pub fn registration(output: &Path) -> String {
    let tag = test_tag(output);
    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let link_head = format!("target_link_libraries({tag}_exe ");
    let align = " ".repeat(link_head.chars().count());

    [
        format!("{INDENT}add_executable({tag}_exe src/tests/{file_name})"),
        format!("{INDENT}{link_head}PRIVATE LEMNG"),
        format!("{INDENT}{align}PRIVATE ECHMETShared"),
        format!("{INDENT}{align}PRIVATE SysComp)"),
        format!("{INDENT}add_test({tag} {tag}_exe)"),
        String::new(),
    ]
    .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_strips_directory_and_extension() {
        assert_eq!(test_tag(Path::new("out/src/tests/sebacic.cpp")), "sebacic");
        assert_eq!(test_tag(Path::new("noext")), "noext");
        assert_eq!(test_tag(Path::new("a.b.cpp")), "a.b");
    }

    #[test]
    fn test_registration_lines() {
        let text = registration(Path::new("tests/sebacic.cpp"));
        let expected = concat!(
            "    add_executable(sebacic_exe src/tests/sebacic.cpp)\n",
            "    target_link_libraries(sebacic_exe PRIVATE LEMNG\n",
            "                                      PRIVATE ECHMETShared\n",
            "                                      PRIVATE SysComp)\n",
            "    add_test(sebacic sebacic_exe)\n",
            "\n",
        );
        assert_eq!(text, expected);
    }
}
