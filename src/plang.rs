// SPDX-License-Identifier: PMPL-1.0-or-later

//! "Translation" into programming languages.
//!
//! A joke target: instead of calling the endpoint, the text is dropped into a
//! hello-world program for the chosen language. Each template has exactly one
//! `{}` placeholder.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plang {
    pub code: &'static str,
    pub name: &'static str,
    template: &'static str,
}

const PLACEHOLDER: &str = "{}";

static PLANGS: &[Plang] = &[
    Plang {
        code: "c",
        name: "C (programming language)",
        template: "#include <stdio.h>\nint main() {\n    printf(\"{}\");\n}",
    },
    Plang {
        code: "c+",
        name: "C++ (programming language)",
        template: "#include <iostream>\nusing namespace std;\nint main() {\n    cout << \"{}\" << endl;\n}",
    },
    Plang {
        code: "j",
        name: "Java (programming language)",
        template: "public class HelloWorld {\n    public static void main(String[] args) {\n        System.out.println(\"{}\");\n    }\n}",
    },
    Plang {
        code: "go",
        name: "Go (programming language)",
        template: "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"{}\")\n}",
    },
    Plang {
        code: "rb",
        name: "Ruby (programming language)",
        template: "puts \"{}\"",
    },
    Plang {
        code: "py",
        name: "Python (programming language)",
        template: "print(\"{}\")",
    },
    Plang {
        code: "js",
        name: "JavaScript (programming language)",
        template: "console.log(\"{}\")",
    },
    Plang {
        code: "tp",
        name: "TypeScript (programming language)",
        template: "const s: string = \"{}\"\nconsole.log(s)",
    },
    Plang {
        code: "hs",
        name: "Haskell (programming language)",
        template: "main = putStrLn \"{}\"",
    },
    Plang {
        code: "rs",
        name: "Rust (programming language)",
        template: "fn main() {\n    println!(\"{}\");\n}",
    },
    Plang {
        code: "v",
        name: "Vim script (scripting language)",
        template: "echo \"{}\"",
    },
    Plang {
        code: "em",
        name: "Emacs Lisp (scripting language)",
        template: "(princ \"{}\")",
    },
];

impl Plang {
    /// Renders `text` as a string literal inside this language's hello-world.
    pub fn render(&self, text: &str) -> String {
        let literal = text.replace('\\', "\\\\").replace('"', "\\\"");
        self.template.replacen(PLACEHOLDER, &literal, 1)
    }
}

/// Case-insensitive lookup by short code (`"py"`, `"C+"`).
pub fn lookup(code: &str) -> Option<Plang> {
    let code = code.trim();
    PLANGS
        .iter()
        .find(|plang| plang.code.eq_ignore_ascii_case(code))
        .copied()
}

pub fn all() -> &'static [Plang] {
    PLANGS
}
