/// A single documented query option of a web service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub default: &'static str,
}

/// The fixed, read-only allow-list of query options for one service
#[derive(Debug)]
pub struct OptionSet {
    pub service: &'static str,
    pub docs_url: &'static str,
    pub options: &'static [OptionSpec],
}

impl OptionSet {
    pub fn get(&self, name: &str) -> Option<&'static OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|spec| spec.name)
    }
}

/// Option carrying the genes to search for
pub const GENE_LIST: &str = "geneList";

/// Options telling BioGRID how to match `geneList` entries; one must be truthy
pub const SEARCH_MODES: [&str; 3] = ["searchIds", "searchNames", "searchSynonyms"];

/// BioGRID REST `interactions` options
///
/// See <https://wiki.thebiogrid.org/doku.php/biogridrest>.
pub static BIOGRID_OPTIONS: OptionSet = OptionSet {
    service: "BioGRID",
    docs_url: "https://wiki.thebiogrid.org/doku.php/biogridrest",
    options: &[
        OptionSpec {
            name: "start",
            description: "Results are numbered from 0; fetching starts at this offset",
            default: "0",
        },
        OptionSpec {
            name: "max",
            description: "Number of results to fetch (at most 10000)",
            default: "10000",
        },
        OptionSpec {
            name: "interSpeciesExcluded",
            description: "Exclude interactions between different species",
            default: "false",
        },
        OptionSpec {
            name: "selfInteractionsExcluded",
            description: "Exclude interactions where both interactors are the same gene",
            default: "false",
        },
        OptionSpec {
            name: "evidenceList",
            description: "Pipe-separated list of experimental evidence codes",
            default: "",
        },
        OptionSpec {
            name: "includeEvidence",
            description: "Treat evidenceList as an inclusion list instead of an exclusion list",
            default: "false",
        },
        OptionSpec {
            name: "geneList",
            description: "Genes to search for, sent pipe-separated",
            default: "",
        },
        OptionSpec {
            name: "searchIds",
            description: "Match geneList against Entrez Gene identifiers",
            default: "false",
        },
        OptionSpec {
            name: "searchNames",
            description: "Match geneList against official gene symbols",
            default: "false",
        },
        OptionSpec {
            name: "searchSynonyms",
            description: "Match geneList against gene synonyms",
            default: "false",
        },
        OptionSpec {
            name: "searchBiogridIds",
            description: "Match geneList against BioGRID internal identifiers",
            default: "false",
        },
        OptionSpec {
            name: "additionalIdentifierTypes",
            description: "Pipe-separated list of extra identifier types to search",
            default: "",
        },
        OptionSpec {
            name: "excludeGenes",
            description: "Treat geneList as an exclusion list",
            default: "false",
        },
        OptionSpec {
            name: "includeInteractors",
            description: "Include first-order interactions of the listed genes",
            default: "true",
        },
        OptionSpec {
            name: "includeInteractorInteractions",
            description: "Include interactions between the first-order interactors",
            default: "false",
        },
        OptionSpec {
            name: "pubmedList",
            description: "Pipe-separated list of PubMed identifiers",
            default: "",
        },
        OptionSpec {
            name: "excludePubmeds",
            description: "Treat pubmedList as an exclusion list",
            default: "false",
        },
        OptionSpec {
            name: "htpThreshold",
            description: "Exclude publications reporting more interactions than this",
            default: "2147483647",
        },
        OptionSpec {
            name: "throughputTag",
            description: "Restrict to 'low', 'high' or 'any' throughput experiments",
            default: "any",
        },
        OptionSpec {
            name: "taxId",
            description: "Pipe-separated NCBI taxonomy identifiers, or 'All'",
            default: "All",
        },
        OptionSpec {
            name: "includeHeader",
            description: "Add a header row (tab formats only)",
            default: "false",
        },
        OptionSpec {
            name: "translate",
            description: "Translate identifiers to official symbols where possible",
            default: "false",
        },
    ],
};
