#![no_main]
use libfuzzer_sys::fuzz_target;
use tpcfix::driver::NoProgress;
use tpcfix::tape::ContainerBuilder;
use tpcfix::{convert_stream, VarFraming, VarRecordReader};

fuzz_target!(|data: &[u8]| {
    // The first byte picks a record size, the rest splits into one file of
    // equally sized records. An empty first file would end the container.
    let Some((&size, body)) = data.split_first() else {
        return;
    };
    let size = usize::from(size) + 1;
    let records: Vec<&[u8]> = body.chunks_exact(size).collect();
    if records.is_empty() {
        return;
    }

    let builder = ContainerBuilder::new().file(records.iter().copied()).end();
    let expected = builder.records().to_vec();

    let mut out = Vec::new();
    convert_stream(builder.into_blocks().as_slice(), &mut out, VarFraming::Counted, NoProgress)
        .expect("well-formed container must convert");

    let got: Vec<Vec<u8>> = VarRecordReader::new(out.as_slice(), VarFraming::Counted)
        .collect::<Result<_, _>>()
        .expect("converted output must read back");
    assert_eq!(got, expected);
});
