use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "promfam", about = "promfam command line arguments")]
pub struct CliOpt {
    /// Metrics source: a file path or an http(s) URL; stdin when omitted.
    pub target: Option<String>,

    /// Prefix prepended to every family and sample name.
    #[structopt(long = "prefix", short = "p", default_value = "")]
    pub prefix: String,

    /// Label name to inject into every sample; pair each occurrence with a
    /// --label-value.
    #[structopt(long = "label-name", short = "l", number_of_values = 1)]
    pub label_names: Vec<String>,

    /// Label value to inject into every sample.
    #[structopt(long = "label-value", short = "v", number_of_values = 1)]
    pub label_values: Vec<String>,

    /// Output encoding: 't' for exposition text, 'j' for JSON.
    #[structopt(long = "encode", short = "e", default_value = "t")]
    pub encode: String,
}
