//! Builds model files from configured tables.

use std::collections::{BTreeSet, HashMap};

use indexmap::{IndexMap, map::Entry};
use javagen_codegen::NamingConvention;
use javagen_config::{
    Column, Error, HasAlias, HasName, Project, Result, Settings, Table, TypeMapper,
    TypeMapperRegistry,
};
use javagen_core::formatting::{DOT, quote};
use javagen_model::{
    Class, Constructor, Field, File, HasJavadoc, HasModifiers, Import, Interface, InterfaceField,
    InterfaceMethod, Javadoc, Method, Type,
};
use tracing::debug;

use crate::JAVA_NAMING;

/// One enabled column, resolved to Java names and types.
struct Property {
    column: String,
    constant: String,
    field: String,
    getter: String,
    setter: String,
    ty: Type,
    getter_type: Type,
    nullable: bool,
    auto_increment: bool,
}

/// Translates a [`Project`] into one entity interface per enabled table and,
/// when enabled in [`Settings`], an implementation class next to it.
///
/// Type mappers are resolved through the registry once per identifier per
/// translation.
pub struct EntityTranslator<'r> {
    registry: &'r TypeMapperRegistry,
    settings: Settings,
    naming: NamingConvention,
}

impl<'r> EntityTranslator<'r> {
    pub fn new(registry: &'r TypeMapperRegistry, settings: Settings) -> Self {
        Self {
            registry,
            settings,
            naming: JAVA_NAMING,
        }
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    pub fn translate<'a>(&self, project: &Project<'a>) -> Result<Vec<File>> {
        let package = project.base_package();
        let mut mappers: IndexMap<&'a str, Box<dyn TypeMapper>> = IndexMap::new();
        let mut files = Vec::new();

        for dbms in project.dbmses()? {
            for schema in dbms.schemas()? {
                for table in schema.tables()? {
                    let properties = self.properties(&table, &mut mappers)?;
                    let entity = self.naming.type_name(table.java_name());
                    debug!(
                        table = table.name(),
                        entity = %entity,
                        columns = properties.len(),
                        "translating table"
                    );

                    files.push(self.entity_file(&package, &entity, &table, &properties));
                    if self.settings.generate_implementations {
                        files.push(self.implementation_file(&package, &entity, &properties));
                    }
                }
            }
        }
        Ok(files)
    }

    fn properties<'a>(
        &self,
        table: &Table<'a>,
        mappers: &mut IndexMap<&'a str, Box<dyn TypeMapper>>,
    ) -> Result<Vec<Property>> {
        let mut properties = Vec::new();
        let mut claimed = HashMap::new();
        for column in table.columns()? {
            let mapper = match mappers.entry(column.type_mapper()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let mapper = self.registry.resolve(column.type_mapper())?;
                    entry.insert(mapper)
                }
            };
            let property = self.property(&column, &**mapper);
            let members = [
                ("field", &property.field),
                ("constant", &property.constant),
                ("getter", &property.getter),
            ];
            for (kind, member) in members {
                let previous = claimed.insert((kind, member.clone()), property.column.clone());
                if let Some(first) = previous {
                    return Err(Box::new(Error::DuplicateMember {
                        member: member.clone(),
                        first,
                        second: property.column.clone(),
                        location: table.document().location().to_string(),
                    }));
                }
            }
            properties.push(property);
        }
        Ok(properties)
    }

    fn property(&self, column: &Column<'_>, mapper: &dyn TypeMapper) -> Property {
        let ty = mapper.column_type(column);
        let accessor = (self.naming.to_type)(column.java_name());
        let getter_type = if column.is_nullable() {
            Type::optional(ty.clone())
        } else {
            ty.clone()
        };
        Property {
            column: column.name().to_string(),
            constant: self.naming.constant_name(column.java_name()),
            field: self.naming.member_name(column.java_name()),
            getter: self.naming.safe_name(&format!("get{accessor}")),
            setter: self.naming.safe_name(&format!("set{accessor}")),
            ty,
            getter_type,
            nullable: column.is_nullable(),
            auto_increment: column.is_auto_increment(),
        }
    }

    fn file(&self, package: &str, name: &str, properties: &[Property]) -> File {
        let path = if package.is_empty() {
            format!("{name}.java")
        } else {
            format!("{}/{name}.java", package.replace(DOT, "/"))
        };

        let imports: BTreeSet<&str> = properties
            .iter()
            .flat_map(|p| p.ty.walk().into_iter().chain(p.getter_type.walk()))
            .filter(|ty| ty.needs_import())
            .map(|ty| ty.name.as_str())
            .collect();

        let mut file = File::of(path);
        if !package.is_empty() {
            file = file.package(package);
        }
        imports
            .into_iter()
            .fold(file, |file, name| file.import(Import::of(Type::of(name))))
    }

    fn entity_file(
        &self,
        package: &str,
        entity: &str,
        table: &Table<'_>,
        properties: &[Property],
    ) -> File {
        let mut interface = Interface::of(entity)
            .public()
            .javadoc(Javadoc::of(format!("An entity of table {{@code {}}}.", table.name())));

        for p in properties {
            interface = interface
                .field(InterfaceField::of(&p.constant, Type::string()).value(quote(&p.column)));
        }

        for p in properties {
            let mut doc = Javadoc::of(format!("Returns the {} of this {entity}.", p.field));
            if p.auto_increment {
                doc = doc.line("The value is generated by the database.");
            }
            if p.nullable {
                doc = doc.returns(format!("the {}, if set", p.field));
            } else {
                doc = doc.returns(format!("the {}", p.field));
            }
            interface = interface.method(
                InterfaceMethod::of(&p.getter, p.getter_type.clone())
                    .javadoc(doc),
            );

            let doc = Javadoc::of(format!("Sets the {} of this {entity}.", p.field))
                .param(&p.field, format!("the new {}", p.field))
                .returns("this instance");
            interface = interface.method(
                InterfaceMethod::of(&p.setter, Type::of(entity))
                    .param(Field::of(&p.field, p.ty.clone()))
                    .javadoc(doc),
            );
        }

        self.file(package, entity, properties).declaration(interface)
    }

    fn implementation_file(&self, package: &str, entity: &str, properties: &[Property]) -> File {
        let name = format!("{entity}{}", self.settings.implementation_suffix);
        let mut class = Class::of(&name)
            .public()
            .implements(Type::of(entity))
            .javadoc(Javadoc::of(format!("Default implementation of {{@link {entity}}}.")));

        for p in properties {
            class = class.field(Field::of(&p.field, p.ty.clone()).private());
        }
        class = class.constructor(Constructor::new().public());

        for p in properties {
            let value = if p.nullable {
                format!("return Optional.ofNullable({});", p.field)
            } else {
                format!("return {};", p.field)
            };
            class = class.method(
                Method::of(&p.getter, p.getter_type.clone())
                    .public()
                    .add(value),
            );
            class = class.method(
                Method::of(&p.setter, Type::of(entity))
                    .public()
                    .param(Field::of(&p.field, p.ty.clone()))
                    .add(format!("this.{0} = {0};", p.field))
                    .add("return this;"),
            );
        }

        self.file(package, &name, properties).declaration(class)
    }
}
