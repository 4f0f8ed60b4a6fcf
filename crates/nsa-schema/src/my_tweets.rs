//! # MyTweets — `api.tweet.myTweets` v1
//!
//! User Tweets payload: a user's tweets plus an optional pinned tweet.
//!
//! ```text
//! MyTweets { id: UUID!, username: String!, tweets: [Tweet]!, pinnedTweet: Tweet }
//! Tweet    { id: String!, date: Date!, body: String! }
//! ```

use nsa_core::{
    Codec, Date, FieldKind, FieldPath, FieldSpec, ObjectReader, ObjectWriter, Record,
    RecordDescriptor, Uuid, ValidationError,
};
use serde_json::Value;

static TWEET_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("date", FieldKind::Date),
    FieldSpec::required("body", FieldKind::String),
];

/// Descriptor for [`Tweet`].
pub static TWEET: RecordDescriptor = RecordDescriptor {
    name: "Tweet",
    namespace: "api.tweet.myTweets",
    description: "A single tweet",
    version: 1,
    fields: &TWEET_FIELDS,
};

static TWEET_KIND: FieldKind = FieldKind::Record(&TWEET);

static MY_TWEETS_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("id", FieldKind::Uuid),
    FieldSpec::required("username", FieldKind::String),
    FieldSpec::required("tweets", FieldKind::List(&TWEET_KIND)),
    FieldSpec::optional("pinnedTweet", FieldKind::Record(&TWEET)),
];

/// Descriptor for [`MyTweets`].
pub static MY_TWEETS: RecordDescriptor = RecordDescriptor {
    name: "MyTweets",
    namespace: "api.tweet.myTweets",
    description: "User Tweets payload",
    version: 1,
    fields: &MY_TWEETS_FIELDS,
};

/// A single tweet.
#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    id: String,
    date: Date,
    body: String,
}

impl Tweet {
    /// Build a tweet. All fields are required and already typed.
    pub fn new(id: impl Into<String>, date: Date, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date,
            body: body.into(),
        }
    }

    /// Tweet identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Publication date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Tweet text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Codec for Tweet {
    const KIND: &'static str = "Tweet";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = ObjectReader::new(value, path, &TWEET)?;
        Ok(Self {
            id: obj.required("id")?,
            date: obj.required("date")?,
            body: obj.required("body")?,
        })
    }

    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(ObjectWriter::new(path)
            .required("id", &self.id)?
            .required("date", &self.date)?
            .required("body", &self.body)?
            .finish())
    }
}

impl Record for Tweet {
    fn descriptor() -> &'static RecordDescriptor {
        &TWEET
    }

    // No pattern-constrained fields.
    fn validate_at(&self, _path: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A user's tweets.
#[derive(Debug, Clone, PartialEq)]
pub struct MyTweets {
    id: Uuid,
    username: String,
    tweets: Vec<Tweet>,
    pinned_tweet: Option<Tweet>,
}

impl MyTweets {
    /// Build the payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] at `MyTweets.id` if `id` is not a
    /// canonical UUID.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        tweets: Vec<Tweet>,
        pinned_tweet: Option<Tweet>,
    ) -> Result<Self, ValidationError> {
        let id = Uuid::new(id).map_err(|e| e.at(FieldPath::record(MY_TWEETS.name).field("id")))?;
        Ok(Self {
            id,
            username: username.into(),
            tweets,
            pinned_tweet,
        })
    }

    /// Owner identifier.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Owner username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Tweets, in payload order.
    pub fn tweets(&self) -> &[Tweet] {
        &self.tweets
    }

    /// Pinned tweet, if any.
    pub fn pinned_tweet(&self) -> Option<&Tweet> {
        self.pinned_tweet.as_ref()
    }
}

impl Codec for MyTweets {
    const KIND: &'static str = "MyTweets";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = ObjectReader::new(value, path, &MY_TWEETS)?;
        Ok(Self {
            id: obj.required("id")?,
            username: obj.required("username")?,
            tweets: obj.required("tweets")?,
            pinned_tweet: obj.optional("pinnedTweet")?,
        })
    }

    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(ObjectWriter::new(path)
            .required("id", &self.id)?
            .required("username", &self.username)?
            .required("tweets", &self.tweets)?
            .optional("pinnedTweet", self.pinned_tweet.as_ref())?
            .finish())
    }
}

impl Record for MyTweets {
    fn descriptor() -> &'static RecordDescriptor {
        &MY_TWEETS
    }

    fn validate_at(&self, path: &FieldPath) -> Result<(), ValidationError> {
        self.id.encode(&path.field("id"))?;
        let tweets = path.field("tweets");
        for (i, tweet) in self.tweets.iter().enumerate() {
            tweet.validate_at(&tweets.index(i))?;
        }
        if let Some(pinned) = &self.pinned_tweet {
            pinned.validate_at(&path.field("pinnedTweet"))?;
        }
        Ok(())
    }
}
