use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub const BORDERS: &str = "\
France = Spain 623 km; Belgium 620 km; Germany 451 km
Spain = France 623 km; Portugal 1,224 km
Portugal = Spain 1,224 km
Belgium = France 620 km; Germany 133 km
Germany = France 451 km; Belgium 133 km
United States = Canada 8,893 km
Canada = United States 8,893 km
Madagascar =
";

pub const CAPDIST: &str = "\
numa,ida,numb,idb,kmdist,midist
220,FRN,230,SPN,1053,654
235,POR,230,SPN,502,312
220,FRN,211,BEL,262,163
220,FRN,255,GMY,878,546
211,BEL,255,GMY,601,373
2,USA,20,CAN,731,454
";

pub const STATE_NAMES: &str = "\
statenumber\tstateid\tcountryname\tstart\tend
2\tUSA\tUnited States\t1816-01-01\t2020-12-31
20\tCAN\tCanada\t1920-01-10\t2020-12-31
211\tBEL\tBelgium\t1830-01-01\t2020-12-31
220\tFRN\tFrance\t1816-01-01\t2020-12-31
230\tSPN\tSpain\t1816-01-01\t2020-12-31
235\tPOR\tPortugal\t1816-01-01\t2020-12-31
255\tGMY\tGermany\t1990-10-03\t2020-12-31
580\tMAG\tMadagascar\t1960-06-26\t2020-12-31
";

pub fn roadtrip() -> Command {
    cargo_bin_cmd!("roadtrip")
}

/// Write the sample data files into `dir` under their default names
pub fn write_data(dir: &Path) {
    fs::write(dir.join("borders.txt"), BORDERS).unwrap();
    fs::write(dir.join("capdist.csv"), CAPDIST).unwrap();
    fs::write(dir.join("state_name.tsv"), STATE_NAMES).unwrap();
}

/// A command running in `dir`, isolated from any user config
pub fn roadtrip_in(dir: &Path) -> Command {
    let mut cmd = roadtrip();
    cmd.current_dir(dir)
        .env("ROADTRIP_CONFIG_DIR", dir.join("no-user-config"))
        .env_remove("ROADTRIP_CONFIG")
        .env_remove("ROADTRIP_LOG")
        .env_remove("RUST_LOG");
    cmd
}
