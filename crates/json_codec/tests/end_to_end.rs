//! Concrete end-to-end scenarios (spec §8, "Concrete end-to-end scenarios").
//!
//! Each scenario hand-writes the small `RecordDecode`/`RecordEncode` impls
//! a host's code generator would otherwise produce, since this crate leaves
//! that generation to the caller.

use json_codec::{
    Decode, DecodeError, Encode, FieldNameMapping, Options, RecordDecode, RecordEncode,
    decode_record, encode_record,
};

struct Named {
    name: String,
}

#[derive(Default)]
struct NamedState {
    name: Option<String>,
}

impl RecordDecode for Named {
    type State = NamedState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        if name != "name" {
            return None;
        }
        let (result, rest) = String::decode(bytes, options);
        match result {
            Ok(v) => {
                state.name = Some(v);
                Some((Ok(()), rest))
            }
            Err(e) => Some((Err(e), rest)),
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(Named {
            name: state.name.ok_or(DecodeError::TooShort)?,
        })
    }
}

#[test]
fn scenario_1_decodes_name_field() {
    let options = Options::default();
    let (result, rest) = decode_record::<Named>(r#"{"name":"Röc Lang"}"#.as_bytes(), &options);
    assert_eq!(result.unwrap().name, "R\u{f6}c Lang");
    assert!(rest.is_empty());
}

struct Fruit {
    fruit_count: u32,
    owner_name: String,
}

#[derive(Default)]
struct FruitState {
    fruit_count: Option<u32>,
    owner_name: Option<String>,
}

impl RecordDecode for Fruit {
    type State = FruitState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        match name {
            "fruitCount" => {
                let (result, rest) = u32::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.fruit_count = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "ownerName" => {
                let (result, rest) = String::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.owner_name = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            _ => None,
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(Fruit {
            fruit_count: state.fruit_count.ok_or(DecodeError::TooShort)?,
            owner_name: state.owner_name.ok_or(DecodeError::TooShort)?,
        })
    }
}

impl RecordEncode for Fruit {
    fn fields(&self) -> Vec<(&str, &dyn Encode)> {
        vec![
            ("fruitCount", &self.fruit_count as &dyn Encode),
            ("ownerName", &self.owner_name as &dyn Encode),
        ]
    }
}

#[test]
fn scenario_2_encodes_with_pascal_case_mapping() {
    let options = Options {
        field_name_mapping: FieldNameMapping::PascalCase,
        ..Options::default()
    };
    let fruit = Fruit {
        fruit_count: 2,
        owner_name: "Farmer Joe".to_string(),
    };
    let mut out = Vec::new();
    encode_record(&fruit, &mut out, &options);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        r#"{"FruitCount":2,"OwnerName":"Farmer Joe"}"#
    );
}

#[test]
fn scenario_3_decodes_list_of_tuples() {
    let options = Options::default();
    let input = b"[ [ 123,\n\"apples\" ], [  456,  \"oranges\" ]]";
    let (result, rest): (Result<Vec<(u32, String)>, _>, _) = Decode::decode(input, &options);
    assert_eq!(
        result,
        Ok(vec![
            (123, "apples".to_string()),
            (456, "oranges".to_string())
        ])
    );
    assert!(rest.is_empty());
}

struct Thumbnail {
    height: u32,
    url: String,
    width: u32,
}

#[derive(Default)]
struct ThumbnailState {
    height: Option<u32>,
    url: Option<String>,
    width: Option<u32>,
}

impl RecordDecode for Thumbnail {
    type State = ThumbnailState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        match name {
            "height" => {
                let (result, rest) = u32::decode(bytes, options);
                result
                    .map(|v| state.height = Some(v))
                    .map_or_else(|e| Some((Err(e), rest)), |()| Some((Ok(()), rest)))
            }
            "url" => {
                let (result, rest) = String::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.url = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "width" => {
                let (result, rest) = u32::decode(bytes, options);
                result
                    .map(|v| state.width = Some(v))
                    .map_or_else(|e| Some((Err(e), rest)), |()| Some((Ok(()), rest)))
            }
            _ => None,
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(Thumbnail {
            height: state.height.ok_or(DecodeError::TooShort)?,
            url: state.url.ok_or(DecodeError::TooShort)?,
            width: state.width.ok_or(DecodeError::TooShort)?,
        })
    }
}

impl RecordEncode for Thumbnail {
    fn fields(&self) -> Vec<(&str, &dyn Encode)> {
        vec![
            ("height", &self.height as &dyn Encode),
            ("url", &self.url as &dyn Encode),
            ("width", &self.width as &dyn Encode),
        ]
    }
}

struct Image {
    animated: bool,
    height: u32,
    ids: Vec<u32>,
    thumbnail: Thumbnail,
    title: String,
    width: u32,
}

#[derive(Default)]
struct ImageState {
    animated: Option<bool>,
    height: Option<u32>,
    ids: Option<Vec<u32>>,
    thumbnail: Option<Thumbnail>,
    title: Option<String>,
    width: Option<u32>,
}

impl RecordDecode for Image {
    type State = ImageState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        match name {
            "animated" => {
                let (result, rest) = bool::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.animated = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "height" => {
                let (result, rest) = u32::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.height = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "ids" => {
                let (result, rest) = <Vec<u32>>::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.ids = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "thumbnail" => {
                let (result, rest) = decode_record::<Thumbnail>(bytes, options);
                match result {
                    Ok(v) => {
                        state.thumbnail = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "title" => {
                let (result, rest) = String::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.title = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            "width" => {
                let (result, rest) = u32::decode(bytes, options);
                match result {
                    Ok(v) => {
                        state.width = Some(v);
                        Some((Ok(()), rest))
                    }
                    Err(e) => Some((Err(e), rest)),
                }
            }
            _ => None,
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(Image {
            animated: state.animated.ok_or(DecodeError::TooShort)?,
            height: state.height.ok_or(DecodeError::TooShort)?,
            ids: state.ids.ok_or(DecodeError::TooShort)?,
            thumbnail: state.thumbnail.ok_or(DecodeError::TooShort)?,
            title: state.title.ok_or(DecodeError::TooShort)?,
            width: state.width.ok_or(DecodeError::TooShort)?,
        })
    }
}

impl RecordEncode for Image {
    fn fields(&self) -> Vec<(&str, &dyn Encode)> {
        vec![
            ("animated", &self.animated as &dyn Encode),
            ("height", &self.height as &dyn Encode),
            ("ids", &self.ids as &dyn Encode),
            ("thumbnail", &self.thumbnail as &dyn Encode),
            ("title", &self.title as &dyn Encode),
            ("width", &self.width as &dyn Encode),
        ]
    }
}

impl Encode for Thumbnail {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        encode_record(self, out, options);
    }
}

struct ImageEnvelope {
    image: Image,
}

#[derive(Default)]
struct ImageEnvelopeState {
    image: Option<Image>,
}

impl RecordDecode for ImageEnvelope {
    type State = ImageEnvelopeState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        if name != "image" {
            return None;
        }
        let (result, rest) = decode_record::<Image>(bytes, options);
        match result {
            Ok(v) => {
                state.image = Some(v);
                Some((Ok(()), rest))
            }
            Err(e) => Some((Err(e), rest)),
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(ImageEnvelope {
            image: state.image.ok_or(DecodeError::TooShort)?,
        })
    }
}

impl RecordEncode for ImageEnvelope {
    fn fields(&self) -> Vec<(&str, &dyn Encode)> {
        vec![("image", &self.image as &dyn Encode)]
    }
}

impl Encode for Image {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        encode_record(self, out, options);
    }
}

#[test]
fn scenario_4_round_trips_rfc8259_image_example_byte_for_byte() {
    let options = Options {
        field_name_mapping: FieldNameMapping::PascalCase,
        ..Options::default()
    };
    let input = br#"{"Image":{"Animated":false,"Height":600,"Ids":[116,943,234,38793],"Thumbnail":{"Height":125,"Url":"http:\/\/www.example.com\/image\/481989943","Width":100},"Title":"View from 15th Floor","Width":800}}"#;
    let (result, rest) = decode_record::<ImageEnvelope>(input, &options);
    let envelope = result.expect("valid RFC 8259 example decodes");
    assert!(rest.is_empty());
    assert_eq!(envelope.image.height, 600);
    assert_eq!(envelope.image.ids, vec![116, 943, 234, 38793]);
    assert_eq!(envelope.image.thumbnail.width, 100);

    let mut out = Vec::new();
    encode_record(&envelope, &mut out, &options);
    assert_eq!(out, input.to_vec());
}

struct Owner {
    owner_name: String,
}

#[derive(Default)]
struct OwnerState {
    owner_name: Option<String>,
}

impl RecordDecode for Owner {
    type State = OwnerState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        if name != "ownerName" {
            return None;
        }
        let (result, rest) = String::decode(bytes, options);
        match result {
            Ok(v) => {
                state.owner_name = Some(v);
                Some((Ok(()), rest))
            }
            Err(e) => Some((Err(e), rest)),
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(Owner {
            owner_name: state.owner_name.ok_or(DecodeError::TooShort)?,
        })
    }
}

#[test]
fn scenario_5_skips_unknown_fields_across_brace_bearing_strings() {
    let options = Options {
        skip_missing_properties: true,
        ..Options::default()
    };
    let input = br#"{"extraField":{"fieldA":6,"nested":{"nestField":"ab}}}}}cd"}},"ownerName":"Farmer Joe"}"#;
    let (result, rest) = decode_record::<Owner>(input, &options);
    assert_eq!(result.unwrap().owner_name, "Farmer Joe");
    assert!(rest.is_empty());
}

struct OptionalOwner {
    owner_name: Option<String>,
}

#[derive(Default)]
struct OptionalOwnerState {
    owner_name: Option<String>,
}

impl RecordDecode for OptionalOwner {
    type State = OptionalOwnerState;

    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])> {
        if name != "ownerName" {
            return None;
        }
        let (result, rest) = <Option<String>>::decode(bytes, options);
        match result {
            Ok(v) => {
                state.owner_name = v;
                Some((Ok(()), rest))
            }
            Err(e) => Some((Err(e), rest)),
        }
    }

    fn finalize(state: Self::State, _options: &Options) -> Result<Self, DecodeError> {
        Ok(OptionalOwner {
            owner_name: state.owner_name,
        })
    }
}

#[test]
fn scenario_6_null_fails_a_plain_string_field() {
    let options = Options {
        null_decode_as_empty: false,
        ..Options::default()
    };
    let (result, rest) = decode_record::<Named>(br#"{"name":null}"#, &options);
    assert_eq!(result, Err(DecodeError::TooShort));
    assert_eq!(rest, br#"{"name":null}"#);
}

#[test]
fn scenario_6_null_as_empty_drops_the_field() {
    let options = Options {
        null_decode_as_empty: true,
        ..Options::default()
    };
    let (result, rest) = decode_record::<OptionalOwner>(br#"{"ownerName":null}"#, &options);
    assert_eq!(result.unwrap().owner_name, None);
    assert!(rest.is_empty());
}
