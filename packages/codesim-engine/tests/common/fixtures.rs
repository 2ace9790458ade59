//! Source fixtures
//!
//! Small programs in each supported language, plus "plagiarised" variants
//! that keep the structure and change every name.

use codesim_engine::NodeSequence;

/// Java class computing an array sum with a loop
pub fn java_sum(class: &str, method: &str, array: &str, acc: &str) -> String {
    format!(
        r#"public class {class} {{
    public static int {method}(int[] {array}) {{
        int {acc} = 0;
        for (int i = 0; i < {array}.length; i++) {{
            {acc} += {array}[i];
        }}
        return {acc};
    }}
}}
"#
    )
}

/// Java class with a recursive factorial and a string helper
pub fn java_unrelated() -> String {
    r#"public class Greeter {
    private final String name;

    public Greeter(String name) {
        this.name = name;
    }

    public String greet() {
        if (name == null) {
            return "hello";
        }
        return "hello " + name.trim();
    }
}
"#
    .to_string()
}

/// Python module with two functions
pub fn python_stats(mean_fn: &str, var_fn: &str, xs: &str) -> String {
    format!(
        "def {mean_fn}({xs}):\n    total = 0\n    for x in {xs}:\n        total += x\n    return total / len({xs})\n\n\ndef {var_fn}({xs}):\n    m = {mean_fn}({xs})\n    return sum((x - m) ** 2 for x in {xs}) / len({xs})\n"
    )
}

/// Same functions as [`python_stats`] in reverse order
pub fn python_stats_reordered(mean_fn: &str, var_fn: &str, xs: &str) -> String {
    format!(
        "def {var_fn}({xs}):\n    m = {mean_fn}({xs})\n    return sum((x - m) ** 2 for x in {xs}) / len({xs})\n\n\ndef {mean_fn}({xs}):\n    total = 0\n    for x in {xs}:\n        total += x\n    return total / len({xs})\n"
    )
}

/// Python class unrelated to [`python_stats`]
pub fn python_unrelated() -> String {
    "class Stack:\n    def __init__(self):\n        self.items = []\n\n    def push(self, item):\n        self.items.append(item)\n\n    def is_empty(self):\n        return not self.items\n".to_string()
}

/// Node sequence from space-separated tags and explicit lines
pub fn sequence(tags: &str, lines: &[i64]) -> NodeSequence {
    let tags: Vec<String> = tags.split_whitespace().map(str::to_string).collect();
    NodeSequence::from_parts(tags, lines.to_vec()).expect("tags and lines must have equal length")
}
