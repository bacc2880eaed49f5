use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use plater_codegen::TemplateEngine;
use plater_schema::Schema;

use crate::artifacts::Artifact;
use crate::banner::Banner;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for plater_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for plater_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "plater")]
#[command(version)]
#[command(about = "Generate ORM/GraphQL/UI boilerplate from an ER schema file")]
pub(crate) struct Cli {
    /// Path to the ER schema JSON file
    pub schema_file: PathBuf,

    /// Generate the entity model classes
    #[arg(short, long)]
    pub entity: bool,

    /// Generate the framework module
    #[arg(short, long)]
    pub module: bool,

    /// Generate the service layer
    #[arg(short, long)]
    pub service: bool,

    /// Generate the API resolver
    #[arg(short, long)]
    pub resolver: bool,

    /// Generate the combined GraphQL operations
    #[arg(short, long)]
    pub graphql: bool,

    /// Generate the front-end table view
    #[arg(short, long)]
    pub table: bool,

    /// Generate the front-end create/update form
    #[arg(short, long)]
    pub create_update: bool,

    /// Generate every artifact
    #[arg(short, long)]
    pub all: bool,

    /// Show the parsed schema, inflections, and loaded template keys
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress section banners
    #[arg(long)]
    pub no_banner: bool,

    /// Directory containing the template files
    #[arg(long, default_value = "templates")]
    pub templates: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let artifacts = self.selected();
        if artifacts.is_empty() && !self.verbose {
            bail!(
                "no artifacts selected; pass one or more of \
                 --entity, --module, --service, --resolver, --graphql, \
                 --table, --create-update, or --all"
            );
        }

        let engine = TemplateEngine::load(&self.templates).unwrap_or_exit();
        let schema = plater_schema::parse_file(&self.schema_file).unwrap_or_exit();

        let banner = Banner::new(!self.no_banner && (self.verbose || artifacts.len() > 1));

        if self.verbose {
            self.show_details(&banner, &engine, &schema)?;
        }

        for artifact in artifacts {
            banner.show(artifact.label());
            let output = artifact.render(&engine, &schema).unwrap_or_exit();
            println!("{}", output);
        }

        Ok(())
    }

    /// The selected artifacts, in the fixed generation order.
    fn selected(&self) -> Vec<Artifact> {
        let table = [
            (self.entity, Artifact::Entity),
            (self.module, Artifact::Module),
            (self.service, Artifact::Service),
            (self.resolver, Artifact::Resolver),
            (self.graphql, Artifact::Graphql),
            (self.table, Artifact::Table),
            (self.create_update, Artifact::CreateUpdate),
        ];

        table
            .into_iter()
            .filter(|(on, _)| *on || self.all)
            .map(|(_, artifact)| artifact)
            .collect()
    }

    fn show_details(
        &self,
        banner: &Banner,
        engine: &TemplateEngine,
        schema: &Schema,
    ) -> Result<()> {
        banner.show(&schema.inflections.init_lower_sg);
        println!("{}", serde_json::to_string_pretty(schema)?);

        banner.show("inflections");
        println!("{}", serde_json::to_string_pretty(&schema.inflections)?);

        banner.show("templates");
        for key in engine.keys() {
            println!("{}", key);
        }

        Ok(())
    }
}
