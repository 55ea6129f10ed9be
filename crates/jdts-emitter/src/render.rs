//! Rendering of declaration IR into TypeScript module blocks.
//!
//! One `declare module '<package>'` block per distinct full package in
//! the group, types inside sorted by the fixed priority list and then by
//! name. Generic translation happens here: the primitive map,
//! `java.util.List` erasure to arrays, and conjunctive bound clauses.

use indexmap::IndexMap;
use jdts_ir::{GenericDefinition, MethodDefinition, TypeDefinition, TypeDefinitionKind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::accessors::synthesize_accessors;
use crate::flatten::{flatten_inherited, method_signature};
use crate::imports::plan_imports;

/// Types that must come first in their module: late emission breaks the
/// mutually referential declarations that lean on them.
const EMIT_FIRST: &[&str] = &["Keyed", "Component", "CommandSender", "Entity"];

const PRIMITIVE_MAP: &[(&str, &str)] = &[
    ("void", "void"),
    ("boolean", "boolean"),
    ("byte", "number"),
    ("short", "number"),
    ("int", "number"),
    ("long", "number"),
    ("float", "number"),
    ("double", "number"),
    ("char", "string"),
    ("String", "string"),
    ("Object", "any"),
    ("?", "any"),
];

/// Renders declaration IR into TypeScript ambient module text.
pub struct TypeScriptEmitter<'a> {
    /// Every definition in the run, by canonical name; the inheritance
    /// flattening walk resolves ancestors through this.
    all: FxHashMap<String, &'a TypeDefinition>,
}

impl<'a> TypeScriptEmitter<'a> {
    pub fn new(all_definitions: &'a [TypeDefinition]) -> Self {
        let mut all = FxHashMap::default();
        for definition in all_definitions {
            all.insert(definition.canonical_name(), definition);
        }
        Self { all }
    }

    /// Emit every module block for one output module key.
    ///
    /// The IR is mutated in place (flattening, accessor synthesis,
    /// member ordering) before printing and is not reusable afterwards.
    pub fn emit_package(&self, base_package: &str, module_types: Vec<TypeDefinition>) -> String {
        tracing::debug!(base_package, count = module_types.len(), "emitting module group");

        let mut groups: IndexMap<String, Vec<TypeDefinition>> = IndexMap::new();
        for definition in module_types {
            groups
                .entry(definition.package.clone())
                .or_default()
                .push(definition);
        }
        groups.sort_keys();

        let blocks: Vec<String> = groups
            .into_iter()
            .map(|(package, group)| self.emit_module(&package, group))
            .collect();
        blocks.join("\n\n")
    }

    fn emit_module(&self, package: &str, mut types: Vec<TypeDefinition>) -> String {
        types.sort_by(|a, b| {
            type_priority(&a.name)
                .cmp(&type_priority(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });

        for definition in &mut types {
            let inherited_names = flatten_inherited(definition, &self.all);
            synthesize_accessors(definition, &inherited_names);
            sort_and_dedup_members(definition);
        }

        // Imports are planned after flattening so copied methods count.
        let plan = plan_imports(&types, package);

        let mut writer = Writer::default();
        writer.line(0, &format!("declare module '{package}' {{"));
        for import in &plan.lines {
            writer.line(1, import);
        }
        if !plan.lines.is_empty() {
            writer.blank();
        }
        for (index, definition) in types.iter().enumerate() {
            if index > 0 {
                writer.blank();
            }
            self.render_type(&mut writer, definition, &plan.renamed);
        }
        writer.line(0, "}");
        writer.finish()
    }

    fn render_type(
        &self,
        writer: &mut Writer,
        definition: &TypeDefinition,
        renamed: &FxHashMap<String, String>,
    ) {
        render_javadoc(writer, 1, &definition.javadoc);

        let generics = self.render_declaration_generics(&definition.generics, renamed);
        match definition.kind {
            TypeDefinitionKind::Class => {
                let mut header = format!("class {}{generics}", definition.name);
                if let Some(superclass) = &definition.superclass {
                    header.push_str(" extends ");
                    header.push_str(&self.render_generic_use(superclass, renamed));
                }
                if !definition.interfaces.is_empty() {
                    header.push_str(" implements ");
                    header.push_str(&self.render_use_list(&definition.interfaces, renamed));
                }
                header.push_str(" {");
                writer.line(1, &header);
                self.render_members(writer, definition, renamed);
                writer.line(1, "}");
            }
            TypeDefinitionKind::Interface if interface_needs_companion_class(definition) => {
                // Static members have no home on a TypeScript interface.
                // The merged pair keeps the full extension list on the
                // interface while the class carries the members and
                // implements only the first supertype.
                let mut interface_header = format!("interface {}{generics}", definition.name);
                if !definition.interfaces.is_empty() {
                    interface_header.push_str(" extends ");
                    interface_header.push_str(&self.render_use_list(&definition.interfaces, renamed));
                }
                interface_header.push_str(" {}");
                writer.line(1, &interface_header);

                let mut class_header = format!("class {}{generics}", definition.name);
                if let Some(first) = definition.interfaces.first() {
                    class_header.push_str(" implements ");
                    class_header.push_str(&self.render_generic_use(first, renamed));
                }
                class_header.push_str(" {");
                writer.line(1, &class_header);
                self.render_members(writer, definition, renamed);
                writer.line(1, "}");
            }
            TypeDefinitionKind::Interface => {
                let mut header = format!("interface {}{generics}", definition.name);
                if !definition.interfaces.is_empty() {
                    header.push_str(" extends ");
                    header.push_str(&self.render_use_list(&definition.interfaces, renamed));
                }
                header.push_str(" {");
                writer.line(1, &header);
                self.render_members(writer, definition, renamed);
                writer.line(1, "}");
            }
        }
    }

    fn render_members(
        &self,
        writer: &mut Writer,
        definition: &TypeDefinition,
        renamed: &FxHashMap<String, String>,
    ) {
        for field in &definition.fields {
            render_javadoc(writer, 2, &field.javadoc);
            let mut line = String::new();
            if field.is_static {
                line.push_str("static ");
            }
            if field.readonly {
                line.push_str("readonly ");
            }
            line.push_str(&field.name);
            line.push_str(": ");
            line.push_str(&self.render_generic_use(&field.ty, renamed));
            line.push(';');
            writer.line(2, &line);
        }

        for constructor in &definition.constructors {
            let parameters = self.render_parameters(&constructor.parameters, renamed);
            writer.line(2, &format!("constructor({parameters});"));
        }

        for method in &definition.methods {
            render_javadoc(writer, 2, &method.javadoc);
            writer.line(2, &self.render_method(method, renamed));
        }
    }

    fn render_method(&self, method: &MethodDefinition, renamed: &FxHashMap<String, String>) -> String {
        let mut line = String::new();
        if method.is_static {
            line.push_str("static ");
        }
        let parameters = self.render_parameters(&method.parameters, renamed);

        // Synthesized properties render as accessor declarations; a
        // setter must not carry a return annotation.
        if method.name.starts_with("get ") {
            line.push_str(&method.name);
            line.push_str("(): ");
            line.push_str(&self.render_generic_use(&method.return_type, renamed));
            line.push(';');
            return line;
        }
        if method.name.starts_with("set ") {
            line.push_str(&method.name);
            line.push('(');
            line.push_str(&parameters);
            line.push_str(");");
            return line;
        }

        line.push_str(&method.name);
        line.push_str(&self.render_method_generics(&method.generics, renamed));
        line.push('(');
        line.push_str(&parameters);
        line.push_str("): ");
        line.push_str(&self.render_generic_use(&method.return_type, renamed));
        line.push(';');
        line
    }

    fn render_parameters(
        &self,
        parameters: &[jdts_ir::ParameterDefinition],
        renamed: &FxHashMap<String, String>,
    ) -> String {
        parameters
            .iter()
            .map(|parameter| {
                let ty = self.render_generic_use(&parameter.ty, renamed);
                if parameter.spread {
                    format!("...{}: {ty}[]", parameter.name)
                } else {
                    format!("{}: {ty}", parameter.name)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Type-parameter clause for class/interface headers; every
    /// parameter defaults to `any` so partial instantiations stay legal.
    fn render_declaration_generics(
        &self,
        generics: &[GenericDefinition],
        renamed: &FxHashMap<String, String>,
    ) -> String {
        if generics.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = generics
            .iter()
            .map(|generic| format!("{}{} = any", generic.name, self.render_bounds(generic, renamed)))
            .collect();
        format!("<{}>", parts.join(", "))
    }

    fn render_method_generics(
        &self,
        generics: &[GenericDefinition],
        renamed: &FxHashMap<String, String>,
    ) -> String {
        if generics.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = generics
            .iter()
            .map(|generic| format!("{}{}", generic.name, self.render_bounds(generic, renamed)))
            .collect();
        format!("<{}>", parts.join(", "))
    }

    /// Upper bounds render as a conjunctive clause: `extends A & B`.
    fn render_bounds(
        &self,
        generic: &GenericDefinition,
        renamed: &FxHashMap<String, String>,
    ) -> String {
        if generic.extends.is_empty() {
            return String::new();
        }
        let bounds: Vec<String> = generic
            .extends
            .iter()
            .map(|bound| self.render_generic_use(bound, renamed))
            .collect();
        format!(" extends {}", bounds.join(" & "))
    }

    fn render_use_list(
        &self,
        uses: &[GenericDefinition],
        renamed: &FxHashMap<String, String>,
    ) -> String {
        uses.iter()
            .map(|use_| self.render_generic_use(use_, renamed))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Translate one type expression into TypeScript.
    fn render_generic_use(
        &self,
        definition: &GenericDefinition,
        renamed: &FxHashMap<String, String>,
    ) -> String {
        let mut base = definition.name.as_str();
        let mut suffix = String::new();
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped;
            suffix.push_str("[]");
        }

        // The ordered-list generic collapses to a native array.
        if (base == "java.util.List" || base == "List") && definition.generics.len() == 1 {
            let element = self.render_generic_use(&definition.generics[0], renamed);
            return format!("{element}[]{suffix}");
        }

        let display = display_name(base, renamed);
        if definition.generics.is_empty() {
            return format!("{display}{suffix}");
        }
        let arguments: Vec<String> = definition
            .generics
            .iter()
            .map(|argument| self.render_generic_use(argument, renamed))
            .collect();
        format!("{display}<{}>{suffix}", arguments.join(", "))
    }
}

/// Interfaces carrying static members (constant fields included) cannot
/// be expressed as a single TypeScript interface.
fn interface_needs_companion_class(definition: &TypeDefinition) -> bool {
    definition.methods.iter().any(|m| m.is_static) || !definition.fields.is_empty()
}

fn type_priority(name: &str) -> usize {
    EMIT_FIRST
        .iter()
        .position(|n| *n == name)
        .unwrap_or(EMIT_FIRST.len())
}

fn display_name(base: &str, renamed: &FxHashMap<String, String>) -> String {
    if let Some(alias) = renamed.get(base) {
        return alias.clone();
    }
    if !base.contains('.') {
        if let Some((_, mapped)) = PRIMITIVE_MAP.iter().find(|(java, _)| *java == base) {
            return (*mapped).to_string();
        }
        return base.to_string();
    }
    base.rsplit('.').next().unwrap_or(base).to_string()
}

/// Stable member order: fields and methods sort by name (stable, so
/// overload order survives) and exact duplicates collapse.
fn sort_and_dedup_members(definition: &mut TypeDefinition) {
    definition.fields.sort_by(|a, b| a.name.cmp(&b.name));
    let mut seen_fields = FxHashSet::default();
    definition.fields.retain(|f| seen_fields.insert(f.name.clone()));

    definition.methods.sort_by(|a, b| a.name.cmp(&b.name));
    let mut seen_methods = FxHashSet::default();
    definition
        .methods
        .retain(|m| seen_methods.insert(method_signature(m)));

    let mut seen_constructors = FxHashSet::default();
    definition.constructors.retain(|c| {
        let key: Vec<String> = c.parameters.iter().map(|p| p.ty.name.clone()).collect();
        seen_constructors.insert(key.join(","))
    });
}

fn render_javadoc(writer: &mut Writer, indent: usize, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    writer.line(indent, "/**");
    for line in lines {
        if line.is_empty() {
            writer.line(indent, " *");
        } else {
            writer.line(indent, &format!(" * {line}"));
        }
    }
    writer.line(indent, " */");
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}
